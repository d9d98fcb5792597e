mod loader;
mod model;
mod resolve;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader};
pub use model::Config;
pub use resolve::ResolvedConfig;

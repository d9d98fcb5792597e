mod registry;
mod style;

pub use registry::ConventionRegistry;
pub use style::CaseStyle;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

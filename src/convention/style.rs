use std::fmt;

/// A naming convention for file and folder names.
///
/// The set is closed and fixed at build time. `Any` is the wildcard `*`
/// style that accepts every name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CaseStyle {
    CamelCase,
    SnakeCase,
    KebabCase,
    PascalCase,
    UpperCase,
    Any,
}

/// Character classes a style is built from. The regex for each style is
/// derived from these classes rather than hand-written per style, so the
/// patterns cannot drift apart.
pub(crate) struct StyleSpec {
    /// Character class for the first non-underscore character.
    pub first: &'static str,
    /// Character class for the remaining characters.
    pub body: &'static str,
    /// Whether leading underscores are permitted (e.g. `__init__.py`).
    pub leading_underscores: bool,
}

impl CaseStyle {
    pub const ALL: [Self; 6] = [
        Self::CamelCase,
        Self::SnakeCase,
        Self::KebabCase,
        Self::PascalCase,
        Self::UpperCase,
        Self::Any,
    ];

    /// Parse a user-facing case name. Returns `None` for unrecognized names;
    /// the config layer turns that into a fatal configuration error.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "camelCase" => Some(Self::CamelCase),
            "snake_case" => Some(Self::SnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            "PascalCase" => Some(Self::PascalCase),
            "UPPER_CASE" => Some(Self::UpperCase),
            "*" => Some(Self::Any),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::SnakeCase => "snake_case",
            Self::KebabCase => "kebab-case",
            Self::PascalCase => "PascalCase",
            Self::UpperCase => "UPPER_CASE",
            Self::Any => "*",
        }
    }

    pub(crate) const fn spec(self) -> Option<StyleSpec> {
        match self {
            Self::CamelCase => Some(StyleSpec {
                first: "[a-z]",
                body: "[a-zA-Z0-9]",
                leading_underscores: false,
            }),
            Self::SnakeCase => Some(StyleSpec {
                first: "[a-z]",
                body: "[a-z0-9_]",
                leading_underscores: true,
            }),
            Self::KebabCase => Some(StyleSpec {
                first: "[a-z]",
                body: "[a-z0-9-]",
                leading_underscores: false,
            }),
            Self::PascalCase => Some(StyleSpec {
                first: "[A-Z]",
                body: "[a-zA-Z0-9]",
                leading_underscores: false,
            }),
            Self::UpperCase => Some(StyleSpec {
                first: "[A-Z]",
                body: "[A-Z0-9_]",
                leading_underscores: true,
            }),
            Self::Any => None,
        }
    }

    /// Regex source matching a full file name: an empty-allowed base name
    /// optionally followed by one dotted suffix. Anchored both ends, so
    /// dotfiles like `.gitignore` match every style.
    #[must_use]
    pub fn file_name_pattern(self) -> String {
        self.spec().map_or_else(
            || String::from("^.*$"),
            |spec| format!("^({})?(\\.\\w+)?$", Self::base_name(&spec)),
        )
    }

    /// Regex source matching a single path segment with no dotted suffix.
    /// Used for directory names, where `.folder` must not pass.
    #[must_use]
    pub fn segment_pattern(self) -> String {
        self.spec().map_or_else(
            || String::from("^.*$"),
            |spec| format!("^({})?$", Self::base_name(&spec)),
        )
    }

    fn base_name(spec: &StyleSpec) -> String {
        let leading = if spec.leading_underscores { "_*" } else { "" };
        format!("{leading}{}+{}*", spec.first, spec.body)
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use indexmap::IndexMap;
use regex::Regex;

use super::CaseStyle;

struct CompiledStyle {
    file_name: Regex,
    segment: Regex,
}

/// Immutable mapping from case style to its compiled patterns.
///
/// Built once per invocation; the key set is the closed `CaseStyle::ALL`.
pub struct ConventionRegistry {
    styles: IndexMap<CaseStyle, CompiledStyle>,
}

impl ConventionRegistry {
    #[must_use]
    pub fn new() -> Self {
        let styles = CaseStyle::ALL
            .into_iter()
            .map(|style| {
                let compiled = CompiledStyle {
                    file_name: Regex::new(&style.file_name_pattern()).expect("Invalid regex"),
                    segment: Regex::new(&style.segment_pattern()).expect("Invalid regex"),
                };
                (style, compiled)
            })
            .collect();
        Self { styles }
    }

    fn get(&self, style: CaseStyle) -> &CompiledStyle {
        // All styles are inserted in new(); the lookup cannot miss.
        &self.styles[&style]
    }

    /// Test a full file name (base name plus optional dotted suffix).
    #[must_use]
    pub fn is_match_file_name(&self, style: CaseStyle, name: &str) -> bool {
        self.get(style).file_name.is_match(name)
    }

    /// Test a single path segment (no dotted suffix allowed).
    #[must_use]
    pub fn is_match_segment(&self, style: CaseStyle, segment: &str) -> bool {
        self.get(style).segment.is_match(segment)
    }
}

impl Default for ConventionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

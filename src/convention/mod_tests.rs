use super::*;

fn registry() -> ConventionRegistry {
    ConventionRegistry::new()
}

#[test]
fn parse_recognizes_all_user_facing_names() {
    assert_eq!(CaseStyle::parse("camelCase"), Some(CaseStyle::CamelCase));
    assert_eq!(CaseStyle::parse("snake_case"), Some(CaseStyle::SnakeCase));
    assert_eq!(CaseStyle::parse("kebab-case"), Some(CaseStyle::KebabCase));
    assert_eq!(CaseStyle::parse("PascalCase"), Some(CaseStyle::PascalCase));
    assert_eq!(CaseStyle::parse("UPPER_CASE"), Some(CaseStyle::UpperCase));
    assert_eq!(CaseStyle::parse("*"), Some(CaseStyle::Any));
}

#[test]
fn parse_rejects_unknown_names() {
    assert_eq!(CaseStyle::parse("SCREAMING_SNAKE"), None);
    assert_eq!(CaseStyle::parse("snake"), None);
    assert_eq!(CaseStyle::parse(""), None);
}

#[test]
fn parse_round_trips_through_name() {
    for style in CaseStyle::ALL {
        assert_eq!(CaseStyle::parse(style.name()), Some(style));
    }
}

#[test]
fn wildcard_matches_every_string() {
    let registry = registry();
    let samples = [
        "",
        "anything",
        "Some File With Spaces.md",
        "some_file_AF_@#4j >XC.md",
        "UPPER-and-lower_mixed.TXT",
        ".gitignore",
    ];
    for sample in samples {
        assert!(registry.is_match_file_name(CaseStyle::Any, sample));
        assert!(registry.is_match_segment(CaseStyle::Any, sample));
    }
}

#[test]
fn snake_case_file_names() {
    let registry = registry();
    for name in ["rust_file.rs", "__init__.py", "__rust_file__.rs", "x.rs", "a_1_b.rs"] {
        assert!(
            registry.is_match_file_name(CaseStyle::SnakeCase, name),
            "{name} should be snake_case"
        );
    }
    for name in ["RustFile.rs", "rust-file.rs", "__rust-file__.rs", "Rust_file.rs"] {
        assert!(
            !registry.is_match_file_name(CaseStyle::SnakeCase, name),
            "{name} should not be snake_case"
        );
    }
}

#[test]
fn camel_case_file_names() {
    let registry = registry();
    assert!(registry.is_match_file_name(CaseStyle::CamelCase, "someFile.ts"));
    assert!(registry.is_match_file_name(CaseStyle::CamelCase, "file2Name.ts"));
    assert!(!registry.is_match_file_name(CaseStyle::CamelCase, "SomeFile.ts"));
    assert!(!registry.is_match_file_name(CaseStyle::CamelCase, "some_file.ts"));
}

#[test]
fn kebab_case_file_names() {
    let registry = registry();
    assert!(registry.is_match_file_name(CaseStyle::KebabCase, "some-file.ts"));
    assert!(registry.is_match_file_name(CaseStyle::KebabCase, "file2.ts"));
    assert!(!registry.is_match_file_name(CaseStyle::KebabCase, "some_file.ts"));
    assert!(!registry.is_match_file_name(CaseStyle::KebabCase, "-file.ts"));
}

#[test]
fn pascal_case_file_names() {
    let registry = registry();
    assert!(registry.is_match_file_name(CaseStyle::PascalCase, "MyTomlFile.toml"));
    assert!(!registry.is_match_file_name(CaseStyle::PascalCase, "some_toml_file.toml"));
    assert!(!registry.is_match_file_name(CaseStyle::PascalCase, "myTomlFile.toml"));
}

#[test]
fn upper_case_file_names() {
    let registry = registry();
    assert!(registry.is_match_file_name(CaseStyle::UpperCase, "LICENSE"));
    assert!(registry.is_match_file_name(CaseStyle::UpperCase, "_ENV_FILE"));
    assert!(registry.is_match_file_name(CaseStyle::UpperCase, "VERSION_2.txt"));
    assert!(!registry.is_match_file_name(CaseStyle::UpperCase, "ReadMe.md"));
    assert!(!registry.is_match_file_name(CaseStyle::UpperCase, "READ-ME"));
}

#[test]
fn empty_base_name_matches_every_style() {
    // Dotfiles like .gitignore have an empty base name before the suffix.
    let registry = registry();
    for style in CaseStyle::ALL {
        assert!(
            registry.is_match_file_name(style, ".gitignore"),
            "{style} should accept .gitignore"
        );
    }
}

#[test]
fn multiple_dots_do_not_match_one_suffix() {
    let registry = registry();
    assert!(!registry.is_match_file_name(CaseStyle::SnakeCase, "my.file.name.rs"));
    assert!(registry.is_match_file_name(CaseStyle::SnakeCase, "archive.tar"));
}

#[test]
fn segment_pattern_rejects_dotted_names() {
    // Directory names get no dotted-suffix allowance: `.folder` must fail.
    let registry = registry();
    assert!(registry.is_match_segment(CaseStyle::KebabCase, "good-name"));
    assert!(!registry.is_match_segment(CaseStyle::KebabCase, ".folder"));
    assert!(!registry.is_match_segment(CaseStyle::KebabCase, "bad_name"));
    assert!(!registry.is_match_segment(CaseStyle::KebabCase, "Folder"));
}

#[test]
fn derived_patterns_are_anchored() {
    let registry = registry();
    // Neither a conforming prefix nor suffix is enough on its own.
    assert!(!registry.is_match_file_name(CaseStyle::SnakeCase, "snake case.rs"));
    assert!(!registry.is_match_segment(CaseStyle::KebabCase, "kebab name"));
}

#[test]
fn display_uses_user_facing_names() {
    assert_eq!(CaseStyle::SnakeCase.to_string(), "snake_case");
    assert_eq!(CaseStyle::Any.to_string(), "*");
}

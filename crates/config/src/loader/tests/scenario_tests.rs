//! End-to-end scenarios for missing data and the documented examples.

use crate::loader::error::ConfigError;
use crate::test_util::{Fixture, VALID_BASE};

fn without_line(text: &str, line: &str) -> String {
    text.lines()
        .filter(|l| l.trim() != line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_profiles_from_base_without_override() {
    let fixture = Fixture::with_base(VALID_BASE);
    let settings = fixture.loader().load().unwrap();
    assert_eq!(settings.general().profiles(), ["default"]);
}

#[test]
fn test_log_level_overridden_to_debug() {
    let fixture = Fixture::with_base(VALID_BASE);
    fixture.write_override("[advanced_options]\nlog_lvl = \"DEBUG\"\n");

    let source = fixture.loader().read_source().unwrap();
    assert_eq!(source.resolve("advanced_options", "log_lvl").unwrap(), "DEBUG");
}

#[test]
fn test_missing_inventory_names_section_and_key() {
    let base = without_line(VALID_BASE, "inventory = \"i\"");
    let fixture = Fixture::with_base(&base);

    match fixture.loader().load() {
        Err(ConfigError::MissingKey { section, key }) => {
            assert_eq!(section, "char");
            assert_eq!(key, "inventory");
        }
        other => panic!("Expected MissingKey, got {other:?}"),
    }
}

#[test]
fn test_missing_key_supplied_by_override_loads() {
    let base = without_line(VALID_BASE, "inventory = \"i\"");
    let fixture = Fixture::with_base(&base);
    fixture.write_override("[char]\ninventory = \"b\"\n");

    let settings = fixture.loader().load().unwrap();
    assert_eq!(settings.char().inventory().to_string(), "b");
}

#[test]
fn test_missing_key_message() {
    let base = without_line(VALID_BASE, "scripts = \"\"");
    let fixture = Fixture::with_base(&base);

    let err = fixture.loader().load().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Key 'scripts' not found in section 'advanced_options'"
    );
}

#[test]
fn test_missing_base_file_is_missing_resource() {
    let fixture = Fixture::with_base(VALID_BASE);
    std::fs::remove_file(&fixture.base).unwrap();

    let err = fixture.loader().load().unwrap_err();
    assert!(matches!(err, ConfigError::MissingResource { .. }));
}

#[test]
fn test_malformed_base_is_parse_error() {
    let fixture = Fixture::with_base("[advanced_options\nlog_lvl = info\n");
    let err = fixture.loader().load().unwrap_err();
    assert!(matches!(err, ConfigError::StoreParse { .. }));
}

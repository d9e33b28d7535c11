//! `[advanced_options]`: hotkeys, logging and process settings.

use serde::Serialize;

use super::hotkey::HotKey;
use super::record::{FieldSpec, RawFields, Record};
use super::values::{LogLevel, name_list, non_blank};
use crate::loader::ValidationError;

/// Validated `[advanced_options]` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedOptions {
    exit_key: HotKey,
    log_lvl: LogLevel,
    process_name: String,
    run_filter: HotKey,
    run_scripts: HotKey,
    scripts: Vec<String>,
}

impl AdvancedOptions {
    /// Hotkey that stops the application.
    pub fn exit_key(&self) -> HotKey {
        self.exit_key
    }

    pub fn log_lvl(&self) -> LogLevel {
        self.log_lvl
    }

    /// Executable name of the game process to attach to.
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// Hotkey that runs the loot filter.
    pub fn run_filter(&self) -> HotKey {
        self.run_filter
    }

    /// Hotkey that runs the configured scripts.
    pub fn run_scripts(&self) -> HotKey {
        self.run_scripts
    }

    /// Script names, in configured order. Empty when none are configured.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }
}

impl Record for AdvancedOptions {
    const SECTION: &'static str = "advanced_options";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("exit_key"),
        FieldSpec::text("log_lvl"),
        FieldSpec::text("process_name"),
        FieldSpec::text("run_filter"),
        FieldSpec::text("run_scripts"),
        FieldSpec::list("scripts"),
    ];

    fn from_raw(fields: &RawFields) -> Result<Self, ValidationError> {
        let hotkey = |key: &str| -> Result<HotKey, ValidationError> {
            let raw = fields.text(key)?;
            raw.parse::<HotKey>()
                .map_err(|e| fields.invalid(key, raw, e.to_string()))
        };

        let exit_key = hotkey("exit_key")?;

        let raw = fields.text("log_lvl")?;
        let log_lvl = raw
            .parse::<LogLevel>()
            .map_err(|reason| fields.invalid("log_lvl", raw, reason))?;

        let raw = fields.text("process_name")?;
        let process_name =
            non_blank(raw).map_err(|reason| fields.invalid("process_name", raw, reason))?;

        let run_filter = hotkey("run_filter")?;
        let run_scripts = hotkey("run_scripts")?;

        // Hotkeys must not shadow each other
        let bound = [
            ("exit_key", exit_key),
            ("run_filter", run_filter),
            ("run_scripts", run_scripts),
        ];
        for (i, (key, value)) in bound.iter().enumerate() {
            if let Some((other, _)) = bound[..i].iter().find(|(_, earlier)| earlier == value) {
                return Err(fields.invalid(
                    key,
                    value.to_string(),
                    format!("hotkey already bound to {other}"),
                ));
            }
        }

        let items = fields.list("scripts")?;
        let scripts =
            name_list(items).map_err(|reason| fields.invalid("scripts", items.join(","), reason))?;

        Ok(Self {
            exit_key,
            log_lvl,
            process_name,
            run_filter,
            run_scripts,
            scripts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(overrides: &[(&'static str, &str)]) -> RawFields {
        let defaults = [
            ("exit_key", "f12"),
            ("log_lvl", "info"),
            ("process_name", "Diablo IV.exe"),
            ("run_filter", "f11"),
            ("run_scripts", "f10"),
            ("scripts", ""),
        ];

        let mut fields = RawFields::new(AdvancedOptions::SECTION);
        for spec in AdvancedOptions::FIELDS {
            let value = overrides
                .iter()
                .chain(defaults.iter())
                .find(|(key, _)| *key == spec.key)
                .map(|(_, value)| *value)
                .unwrap();
            fields.insert(spec.key, spec.transform.apply(value));
        }
        fields
    }

    #[test]
    fn test_valid_record() {
        let options = AdvancedOptions::from_raw(&raw(&[("scripts", "vision_mode,stash")])).unwrap();
        assert_eq!(options.exit_key().to_string(), "f12");
        assert_eq!(options.log_lvl(), LogLevel::Info);
        assert_eq!(options.process_name(), "Diablo IV.exe");
        assert_eq!(options.scripts(), ["vision_mode", "stash"]);
    }

    #[test]
    fn test_empty_scripts_is_no_scripts() {
        let options = AdvancedOptions::from_raw(&raw(&[])).unwrap();
        assert!(options.scripts().is_empty());
    }

    #[test]
    fn test_invalid_log_level() {
        let err = AdvancedOptions::from_raw(&raw(&[("log_lvl", "LOUD")])).unwrap_err();
        assert_eq!(err.section, "advanced_options");
        assert_eq!(err.key, "log_lvl");
        assert_eq!(err.value, "LOUD");
    }

    #[test]
    fn test_blank_process_name() {
        let err = AdvancedOptions::from_raw(&raw(&[("process_name", "  ")])).unwrap_err();
        assert_eq!(err.key, "process_name");
    }

    #[test]
    fn test_invalid_hotkey() {
        let err = AdvancedOptions::from_raw(&raw(&[("run_filter", "f99")])).unwrap_err();
        assert_eq!(err.key, "run_filter");
        assert_eq!(err.value, "f99");
    }

    #[test]
    fn test_hotkey_clash_reported_on_later_field() {
        let err = AdvancedOptions::from_raw(&raw(&[("run_scripts", "F12")])).unwrap_err();
        assert_eq!(err.key, "run_scripts");
        assert!(err.reason.contains("exit_key"), "got: {}", err.reason);
    }

    #[test]
    fn test_stray_delimiter_in_scripts() {
        let err = AdvancedOptions::from_raw(&raw(&[("scripts", "a,,b")])).unwrap_err();
        assert_eq!(err.key, "scripts");
        assert_eq!(err.value, "a,,b");
    }
}

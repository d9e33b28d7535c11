//! `[general]`: filter behavior, stash scanning and profile selection.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::record::{FieldSpec, RawFields, Record};
use super::values::{HandleRares, KeepAspects, name_list, parse_flag};
use crate::constants::MAX_CHEST_TAB;
use crate::loader::ValidationError;

/// Validated `[general]` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralSettings {
    check_chest_tabs: Vec<u8>,
    hidden_transparency: f64,
    keep_aspects: KeepAspects,
    handle_rares: HandleRares,
    local_prefs_path: Option<PathBuf>,
    profiles: Vec<String>,
    run_vision_mode_on_startup: bool,
}

impl GeneralSettings {
    /// Stash tab indices to scan, in configured order.
    pub fn check_chest_tabs(&self) -> &[u8] {
        &self.check_chest_tabs
    }

    /// Overlay opacity while hidden, in `0.0..=1.0`.
    pub fn hidden_transparency(&self) -> f64 {
        self.hidden_transparency
    }

    pub fn keep_aspects(&self) -> KeepAspects {
        self.keep_aspects
    }

    pub fn handle_rares(&self) -> HandleRares {
        self.handle_rares
    }

    /// Game preferences file, if one is configured.
    pub fn local_prefs_path(&self) -> Option<&Path> {
        self.local_prefs_path.as_deref()
    }

    /// Filter profile names, in configured order.
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    pub fn run_vision_mode_on_startup(&self) -> bool {
        self.run_vision_mode_on_startup
    }
}

impl Record for GeneralSettings {
    const SECTION: &'static str = "general";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::list("check_chest_tabs"),
        FieldSpec::text("hidden_transparency"),
        FieldSpec::text("keep_aspects"),
        FieldSpec::text("handle_rares"),
        FieldSpec::text("local_prefs_path"),
        FieldSpec::list("profiles"),
        FieldSpec::text("run_vision_mode_on_startup"),
    ];

    fn from_raw(fields: &RawFields) -> Result<Self, ValidationError> {
        let items = fields.list("check_chest_tabs")?;
        let check_chest_tabs = chest_tabs(items)
            .map_err(|reason| fields.invalid("check_chest_tabs", items.join(","), reason))?;

        let raw = fields.text("hidden_transparency")?;
        let hidden_transparency =
            transparency(raw).map_err(|reason| fields.invalid("hidden_transparency", raw, reason))?;

        let raw = fields.text("keep_aspects")?;
        let keep_aspects = raw
            .parse::<KeepAspects>()
            .map_err(|reason| fields.invalid("keep_aspects", raw, reason))?;

        let raw = fields.text("handle_rares")?;
        let handle_rares = raw
            .parse::<HandleRares>()
            .map_err(|reason| fields.invalid("handle_rares", raw, reason))?;

        let raw = fields.text("local_prefs_path")?.trim();
        let local_prefs_path = (!raw.is_empty()).then(|| PathBuf::from(raw));

        let items = fields.list("profiles")?;
        let profiles =
            name_list(items).map_err(|reason| fields.invalid("profiles", items.join(","), reason))?;

        let raw = fields.text("run_vision_mode_on_startup")?;
        let run_vision_mode_on_startup = parse_flag(raw)
            .map_err(|reason| fields.invalid("run_vision_mode_on_startup", raw, reason))?;

        Ok(Self {
            check_chest_tabs,
            hidden_transparency,
            keep_aspects,
            handle_rares,
            local_prefs_path,
            profiles,
            run_vision_mode_on_startup,
        })
    }
}

fn chest_tabs(items: &[String]) -> Result<Vec<u8>, String> {
    let mut tabs = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if item.is_empty() {
            return Err("chest tab entries must not be empty".to_string());
        }

        let tab = item
            .parse::<u8>()
            .ok()
            .filter(|tab| *tab <= MAX_CHEST_TAB)
            .ok_or_else(|| format!("'{item}' is not a chest tab index (0-{MAX_CHEST_TAB})"))?;

        if tabs.contains(&tab) {
            return Err(format!("chest tab {tab} is listed twice"));
        }
        tabs.push(tab);
    }
    Ok(tabs)
}

fn transparency(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| (0.0..=1.0).contains(value))
        .ok_or_else(|| "must be a number between 0.0 and 1.0".to_string())
}

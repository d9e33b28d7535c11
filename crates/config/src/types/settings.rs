//! The full snapshot produced by one load.

use serde::Serialize;

use super::{AdvancedOptions, CharSettings, GeneralSettings};

/// Every record, all produced by the same load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    advanced_options: AdvancedOptions,
    #[serde(rename = "char")]
    character: CharSettings,
    general: GeneralSettings,
}

impl Settings {
    pub(crate) fn new(
        advanced_options: AdvancedOptions,
        character: CharSettings,
        general: GeneralSettings,
    ) -> Self {
        Self {
            advanced_options,
            character,
            general,
        }
    }

    pub fn advanced_options(&self) -> &AdvancedOptions {
        &self.advanced_options
    }

    pub fn char(&self) -> &CharSettings {
        &self.character
    }

    pub fn general(&self) -> &GeneralSettings {
        &self.general
    }
}

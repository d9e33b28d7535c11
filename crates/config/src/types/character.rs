//! `[char]`: in-game character bindings.

use serde::Serialize;

use super::hotkey::HotKey;
use super::record::{FieldSpec, RawFields, Record};
use crate::loader::ValidationError;

/// Validated `[char]` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharSettings {
    inventory: HotKey,
}

impl CharSettings {
    /// Key the game uses to open the inventory.
    pub fn inventory(&self) -> HotKey {
        self.inventory
    }
}

impl Record for CharSettings {
    const SECTION: &'static str = "char";

    const FIELDS: &'static [FieldSpec] = &[FieldSpec::text("inventory")];

    fn from_raw(fields: &RawFields) -> Result<Self, ValidationError> {
        let raw = fields.text("inventory")?;
        let inventory = raw
            .parse::<HotKey>()
            .map_err(|e| fields.invalid("inventory", raw, e.to_string()))?;

        Ok(Self { inventory })
    }
}

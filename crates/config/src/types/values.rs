//! Enumerated and scalar value types used by the records.
//!
//! Responsibilities:
//! - Parse the enumerated settings (`LogLevel`, `KeepAspects`, `HandleRares`).
//! - Provide field parsers shared by records (booleans, name lists, blank checks).
//!
//! Invariants:
//! - Enumerated values are matched case-insensitively after trimming.
//! - Parsers return a plain reason string; records attach section/key/value.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Verbosity of the host application's log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err("must be one of: debug, info, warning, error, critical".to_string()),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Which legendary aspects are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeepAspects {
    /// Keep every aspect.
    All,
    /// Keep only aspects that improve the codex.
    Upgrade,
    /// Keep no aspects.
    None,
}

impl FromStr for KeepAspects {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "upgrade" => Ok(Self::Upgrade),
            "none" => Ok(Self::None),
            _ => Err("must be one of: all, upgrade, none".to_string()),
        }
    }
}

impl fmt::Display for KeepAspects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Upgrade => write!(f, "upgrade"),
            Self::None => write!(f, "none"),
        }
    }
}

/// How rare items are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleRares {
    /// Run rares through the filter profiles.
    Filter,
    /// Leave rares untouched.
    Ignore,
    /// Mark every rare as junk.
    Junk,
}

impl FromStr for HandleRares {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filter" => Ok(Self::Filter),
            "ignore" => Ok(Self::Ignore),
            "junk" => Ok(Self::Junk),
            _ => Err("must be one of: filter, ignore, junk".to_string()),
        }
    }
}

impl fmt::Display for HandleRares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter => write!(f, "filter"),
            Self::Ignore => write!(f, "ignore"),
            Self::Junk => write!(f, "junk"),
        }
    }
}

/// Parse a boolean flag: `true/false`, `yes/no`, `on/off`, `1/0`.
pub fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err("must be a boolean (true/false, yes/no, on/off, 1/0)".to_string()),
    }
}

/// Trimmed text that must not be blank.
pub fn non_blank(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trim the elements of a split name list.
///
/// `[""]` (the split of an empty value) means "no entries". Any other blank
/// element is rejected so stray delimiters are caught early.
pub fn name_list(items: &[String]) -> Result<Vec<String>, String> {
    if let [only] = items
        && only.trim().is_empty()
    {
        return Ok(Vec::new());
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            non_blank(item).map_err(|_| format!("entry {} is empty", index + 1))
        })
        .collect()
}

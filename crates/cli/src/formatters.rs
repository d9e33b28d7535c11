//! Text rendering for resolved settings.
//!
//! Responsibilities:
//! - Render `Settings` as a section/key listing that mirrors the store layout.
//!
//! Does NOT handle:
//! - JSON output (serialized directly with serde_json in `commands::show`).
//!
//! Invariants:
//! - Sections and keys appear in address-table order.
//! - Lists are joined with "," so the output can be pasted back into an override file.

use d4lf_config::Settings;

pub fn render_text(settings: &Settings) -> String {
    let advanced = settings.advanced_options();
    let character = settings.char();
    let general = settings.general();

    let tabs = general
        .check_chest_tabs()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let prefs = general
        .local_prefs_path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    let sections: [(&str, Vec<(&str, String)>); 3] = [
        (
            "advanced_options",
            vec![
                ("exit_key", advanced.exit_key().to_string()),
                ("log_lvl", advanced.log_lvl().to_string()),
                ("process_name", advanced.process_name().to_string()),
                ("run_filter", advanced.run_filter().to_string()),
                ("run_scripts", advanced.run_scripts().to_string()),
                ("scripts", advanced.scripts().join(",")),
            ],
        ),
        (
            "char",
            vec![("inventory", character.inventory().to_string())],
        ),
        (
            "general",
            vec![
                ("check_chest_tabs", tabs),
                (
                    "hidden_transparency",
                    general.hidden_transparency().to_string(),
                ),
                ("keep_aspects", general.keep_aspects().to_string()),
                ("handle_rares", general.handle_rares().to_string()),
                ("local_prefs_path", prefs),
                ("profiles", general.profiles().join(",")),
                (
                    "run_vision_mode_on_startup",
                    general.run_vision_mode_on_startup().to_string(),
                ),
            ],
        ),
    ];

    let mut out = String::new();
    for (index, (section, entries)) in sections.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("[{}]\n", section));
        for (key, value) in entries {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out
}

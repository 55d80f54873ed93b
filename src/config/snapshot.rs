//! Configuration snapshot import/export.
//!
//! Snapshots are JSON documents in the portable exchange format (`name`,
//! `chips`, `blindStructure` with camelCase keys and level durations in
//! minutes). Parsing is structural only: a document that deserializes is
//! accepted, anything else is rejected without mutating any state.

use super::errors::ConfigResult;
use super::models::TournamentConfig;

/// Parse a configuration snapshot from JSON text.
pub fn parse_snapshot(text: &str) -> ConfigResult<TournamentConfig> {
    Ok(serde_json::from_str(text)?)
}

/// Render a configuration as pretty-printed JSON snapshot text.
pub fn render_snapshot(config: &TournamentConfig) -> ConfigResult<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Suggested file name for an exported snapshot.
///
/// Whitespace runs in the configuration name become underscores, e.g.
/// `"Standard Tournament"` -> `"Standard_Tournament_config.json"`.
pub fn snapshot_file_name(name: &str) -> String {
    let stem: Vec<&str> = name.split_whitespace().collect();
    format!("{}_config.json", stem.join("_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::BlindLevel;

    #[test]
    fn test_round_trip_preserves_configuration() {
        let config = TournamentConfig::standard();
        let text = render_snapshot(&config).unwrap();
        let parsed = parse_snapshot(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_wire_format_uses_camel_case_keys() {
        let mut config = TournamentConfig::turbo();
        config.blind_structure[0] = BlindLevel::new(1, 25, 50, 10).with_ante(5);
        let text = render_snapshot(&config).unwrap();
        assert!(text.contains("\"blindStructure\""));
        assert!(text.contains("\"smallBlind\""));
        assert!(text.contains("\"bigBlind\""));
        assert!(text.contains("\"textColor\""));
        assert!(text.contains("\"duration\": 10"));
        assert!(text.contains("\"ante\": 5"));
    }

    #[test]
    fn test_absent_ante_is_omitted() {
        let config = TournamentConfig::turbo();
        let text = render_snapshot(&config).unwrap();
        assert!(!text.contains("\"ante\""));
    }

    #[test]
    fn test_parse_accepts_exchange_format() {
        let text = r##"{
            "name": "Home Game",
            "chips": [
                { "denomination": 25, "color": "#22c55e", "textColor": "#ffffff" }
            ],
            "blindStructure": [
                { "level": 1, "smallBlind": 25, "bigBlind": 50, "duration": 15 },
                { "level": 2, "smallBlind": 50, "bigBlind": 100, "ante": 10, "duration": 15 }
            ]
        }"##;
        let config = parse_snapshot(text).unwrap();
        assert_eq!(config.name, "Home Game");
        assert_eq!(config.chips[0].value, 25);
        assert_eq!(config.blind_structure[1].ante, Some(10));
    }

    #[test]
    fn test_parse_rejects_malformed_document() {
        assert!(parse_snapshot("not json at all").is_err());
        assert!(parse_snapshot(r#"{"name": "x"}"#).is_err());
    }

    #[test]
    fn test_snapshot_file_name() {
        assert_eq!(
            snapshot_file_name("Standard Tournament"),
            "Standard_Tournament_config.json"
        );
        assert_eq!(snapshot_file_name("Turbo"), "Turbo_config.json");
    }
}

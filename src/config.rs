use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Extents of a label rectangle. The anchor point is one corner; the
/// rectangle spans `label_width` by `label_height` away from it in the
/// direction the placement names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    pub label_width: f64,
    pub label_height: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            label_width: 100.0,
            label_height: 50.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Appended to the input file stem when deriving a label-file path.
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: "_labels".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub placement: PlacementConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    label_width: Option<f64>,
    label_height: Option<f64>,
    output_suffix: Option<String>,
}

/// Loads configuration overrides from an optional JSON file.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Strict JSON is tried first; JSON5 (comments, trailing commas) is
/// accepted as a fallback. Missing keys keep their defaults.
fn parse_config(contents: &str) -> Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(_) => json5::from_str(contents)?,
    };

    let mut config = Config::default();
    if let Some(v) = parsed.label_width {
        config.placement.label_width = v;
    }
    if let Some(v) = parsed.label_height {
        config.placement.label_height = v;
    }
    if let Some(v) = parsed.output_suffix {
        config.output.suffix = v;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_label_size() {
        let config = Config::default();
        assert_eq!(config.placement.label_width, 100.0);
        assert_eq!(config.placement.label_height, 50.0);
        assert_eq!(config.output.suffix, "_labels");
    }

    #[test]
    fn overrides_apply_and_gaps_keep_defaults() {
        let config =
            parse_config(r#"{"labelWidth": 120, "outputSuffix": "_tags"}"#).expect("parse");
        assert_eq!(config.placement.label_width, 120.0);
        assert_eq!(config.placement.label_height, 50.0);
        assert_eq!(config.output.suffix, "_tags");
    }

    #[test]
    fn json5_input_is_accepted() {
        let config = parse_config("{\n  // narrower labels\n  labelWidth: 80,\n}").expect("parse");
        assert_eq!(config.placement.label_width, 80.0);
        assert_eq!(config.placement.label_height, 50.0);
    }

    #[test]
    fn garbage_input_is_rejected() {
        assert!(parse_config("not a config").is_err());
    }
}

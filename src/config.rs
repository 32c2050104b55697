//! JSON runtime configuration for the demo binaries.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::binarize::BinarizeParams;

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub image_out: Option<PathBuf>,
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: BinarizeParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::RuntimeConfig;
    use crate::binarize::ThresholdMethod;

    #[test]
    fn parses_a_full_config() {
        let json = r#"{
            "input_path": "page.png",
            "output": { "image_out": "out/bw.png" },
            "params": {
                "stretch_contrast": true,
                "reduce_levels": 8,
                "method": { "mode": "otsu", "buckets": 128 }
            }
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).expect("valid config");
        assert_eq!(config.input_path.to_str(), Some("page.png"));
        assert!(config.output.json_out.is_none());
        assert!(config.params.stretch_contrast);
        assert_eq!(config.params.reduce_levels, Some(8));
        assert!(matches!(
            config.params.method,
            ThresholdMethod::Otsu { buckets: 128 }
        ));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{ "input_path": "scan.jpg" }"#).expect("valid config");
        assert!(!config.params.stretch_contrast);
        assert!(matches!(
            config.params.method,
            ThresholdMethod::Adaptive { .. }
        ));
    }
}

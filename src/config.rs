//! Kit generation settings
//!
//! Settings come from [`KitConfig::default`], optionally overlaid by a JSON
//! file, and finally by command line flags. Missing JSON fields keep their
//! defaults.

use std::env;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KitError, Result};
use crate::kit::{InstrumentDefaults, KitInfo, NameNormalization};
use crate::layering::{DEFAULT_INTERLEAVE, DEFAULT_MAX_LAYERS};

/// Default extension of the samples to pick up.
pub const DEFAULT_INPUT_EXTENSION: &str = ".wav";

/// Name of the kit description inside a kit folder.
pub const DRUMKIT_FILE: &str = "drumkit.xml";

/// Settings for building a kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Extension of the samples to use, dot included
    pub input_extension: String,
    /// Maximum number of layers per instrument, `None` for no limit
    pub max_layers: Option<NonZeroUsize>,
    /// Convert samples to this extension with SoX
    pub output_extension: Option<String>,
    /// Extra width of each velocity window, as a fraction of an even split
    pub interleave: f64,
    pub naming: NameNormalization,
    pub info: KitInfo,
    pub instrument_defaults: InstrumentDefaults,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            input_extension: DEFAULT_INPUT_EXTENSION.to_string(),
            max_layers: NonZeroUsize::new(DEFAULT_MAX_LAYERS),
            output_extension: None,
            interleave: DEFAULT_INTERLEAVE,
            naming: NameNormalization::default(),
            info: KitInfo::default(),
            instrument_defaults: InstrumentDefaults::default(),
        }
    }
}

impl KitConfig {
    /// Load settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| KitError::ConfigReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: KitConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Normalize extensions and check that the settings make sense.
    pub fn validate(mut self) -> Result<Self> {
        self.input_extension = normalize_extension(&self.input_extension)?;
        self.output_extension = self
            .output_extension
            .as_deref()
            .map(normalize_extension)
            .transpose()?;

        if !self.interleave.is_finite() || !(0.0..=1.0).contains(&self.interleave) {
            return Err(KitError::InvalidConfig {
                reason: format!("interleave must be in [0, 1], got {}", self.interleave),
            });
        }

        Ok(self)
    }

    /// Whether samples are converted rather than copied.
    pub fn transcodes(&self) -> bool {
        self.output_extension.is_some()
    }
}

/// Turn `wav` or `.wav` into `.wav`.
pub fn normalize_extension(extension: &str) -> Result<String> {
    let bare = extension.trim().trim_start_matches('.');
    if bare.is_empty() || bare.contains(['.', '/', '\\']) {
        return Err(KitError::InvalidConfig {
            reason: format!("invalid file extension '{}'", extension),
        });
    }
    Ok(format!(".{}", bare))
}

/// Hydrogen's per-user data folder.
pub fn hydrogen_data_dir() -> Option<PathBuf> {
    let home = env::var_os("HOME").or_else(|| env::var_os("USERPROFILE"))?;
    let home = PathBuf::from(home);
    if cfg!(target_os = "macos") {
        Some(home.join("Library/Application Support/Hydrogen"))
    } else {
        Some(home.join(".hydrogen"))
    }
}

/// Folder Hydrogen loads user drum kits from.
pub fn hydrogen_drumkits_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("data").join("drumkits")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let config = KitConfig::default();
        assert_eq!(config.input_extension, ".wav");
        assert_eq!(config.max_layers.map(NonZeroUsize::get), Some(16));
        assert!(!config.transcodes());
        assert_relative_eq!(config.interleave, 1.0 / 3.0);
        assert_eq!(config.naming, NameNormalization::SeparatorToSpace);
    }

    #[test_case("wav", ".wav" ; "bare")]
    #[test_case(".flac", ".flac" ; "dotted")]
    #[test_case(" ogg ", ".ogg" ; "trimmed")]
    fn test_normalize_extension(input: &str, expected: &str) {
        assert_eq!(normalize_extension(input).unwrap(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("." ; "dot only")]
    #[test_case("tar.gz" ; "double")]
    #[test_case("a/b" ; "path")]
    fn test_normalize_extension_rejects(input: &str) {
        assert!(matches!(
            normalize_extension(input),
            Err(KitError::InvalidConfig { .. })
        ));
    }

    #[test_case(-0.1 ; "negative")]
    #[test_case(1.5 ; "over full width")]
    #[test_case(f64::INFINITY ; "infinite")]
    #[test_case(f64::NAN ; "nan")]
    fn test_validate_rejects_interleave(interleave: f64) {
        let config = KitConfig {
            interleave,
            ..KitConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test_case(0.0 ; "no overlap")]
    #[test_case(1.0 ; "full width")]
    fn test_validate_accepts_interleave_bounds(interleave: f64) {
        let config = KitConfig {
            interleave,
            ..KitConfig::default()
        };
        assert_eq!(config.validate().unwrap().interleave, interleave);
    }

    #[test]
    fn test_validate_normalizes() {
        let config = KitConfig {
            input_extension: "flac".to_string(),
            output_extension: Some("wav".to_string()),
            ..KitConfig::default()
        }
        .validate()
        .unwrap();
        assert_eq!(config.input_extension, ".flac");
        assert_eq!(config.output_extension.as_deref(), Some(".wav"));
        assert!(config.transcodes());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "max_layers": 4,
                "naming": "strip-non-word",
                "info": {{ "author": "me" }},
                "instrument_defaults": {{ "midi_out_note": 36 }}
            }}"#
        )
        .unwrap();

        let config = KitConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_layers.map(NonZeroUsize::get), Some(4));
        assert_eq!(config.naming, NameNormalization::StripNonWord);
        assert_eq!(config.info.author, "me");
        assert_eq!(config.info.license, "undefined license");
        assert_eq!(config.instrument_defaults.midi_out_note, 36);
        assert_eq!(config.input_extension, ".wav");
    }

    #[test]
    fn test_from_file_unlimited_layers() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_layers": null }}"#).unwrap();
        let config = KitConfig::from_file(file.path()).unwrap();
        assert!(config.max_layers.is_none());
    }

    #[test]
    fn test_from_file_errors() {
        let result = KitConfig::from_file(Path::new("/nonexistent/kitgen.json"));
        assert!(matches!(result, Err(KitError::ConfigReadError { .. })));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let result = KitConfig::from_file(file.path());
        assert!(matches!(result, Err(KitError::Serialization(_))));
    }

    #[test]
    fn test_drumkits_dir() {
        assert_eq!(
            hydrogen_drumkits_dir(Path::new("/home/me/.hydrogen")),
            PathBuf::from("/home/me/.hydrogen/data/drumkits")
        );
    }
}

//! Instrument naming
//!
//! Turns a sample folder's path, relative to the scanned root, into an
//! instrument name.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// How a relative folder path becomes an instrument name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameNormalization {
    /// Join the path components with single spaces: `Toms/Floor` → `Toms Floor`
    #[default]
    SeparatorToSpace,
    /// Drop everything but letters, digits and `_`: `Toms/Floor 2` → `TomsFloor2`.
    /// Distinct folders can end up with the same, or an empty, name.
    StripNonWord,
}

impl NameNormalization {
    /// Name for the folder at `relative`.
    ///
    /// The scanned root itself has an empty relative path; it is named
    /// after `root_name` instead.
    pub fn instrument_name(&self, relative: &Path, root_name: &str) -> String {
        let components: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .filter(|c| !c.is_empty())
            .collect();

        let joined = if components.is_empty() {
            root_name.to_string()
        } else {
            components.join(" ")
        };

        match self {
            NameNormalization::SeparatorToSpace => joined,
            NameNormalization::StripNonWord => joined
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect(),
        }
    }
}

impl std::str::FromStr for NameNormalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "separator-to-space" => Ok(NameNormalization::SeparatorToSpace),
            "strip-non-word" => Ok(NameNormalization::StripNonWord),
            other => Err(format!(
                "unknown naming policy '{}' (expected separator-to-space or strip-non-word)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use test_case::test_case;

    #[test_case("Kick", "Kick" ; "single folder")]
    #[test_case("Toms/Floor", "Toms Floor" ; "nested")]
    #[test_case("Cymbals/Ride/Bell 2", "Cymbals Ride Bell 2" ; "keeps inner spaces")]
    fn test_separator_to_space(relative: &str, expected: &str) {
        let name = NameNormalization::SeparatorToSpace
            .instrument_name(&PathBuf::from(relative), "root");
        assert_eq!(name, expected);
    }

    #[test_case("Kick", "Kick" ; "single folder")]
    #[test_case("Toms/Floor 2", "TomsFloor2" ; "nested")]
    #[test_case("hi-hat/open_1", "hihatopen_1" ; "keeps underscore")]
    #[test_case("--/..!", "" ; "can be empty")]
    fn test_strip_non_word(relative: &str, expected: &str) {
        let name =
            NameNormalization::StripNonWord.instrument_name(&PathBuf::from(relative), "root");
        assert_eq!(name, expected);
    }

    #[test]
    fn test_root_folder_uses_root_name() {
        let name = NameNormalization::SeparatorToSpace.instrument_name(Path::new(""), "Snare");
        assert_eq!(name, "Snare");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "strip-non-word".parse::<NameNormalization>(),
            Ok(NameNormalization::StripNonWord)
        );
        assert!("spaces".parse::<NameNormalization>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let policy: NameNormalization = serde_json::from_str("\"separator-to-space\"").unwrap();
        assert_eq!(policy, NameNormalization::SeparatorToSpace);
    }
}

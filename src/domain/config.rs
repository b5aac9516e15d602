use std::path::Path;

use serde::{Deserialize, Serialize};

use super::scale_name::MAX_GROUP_COUNT;

/// Configuration for number conversion.
///
/// Controls how the assembled words are finished and how large a number may
/// get before it is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Versions", into = "Versions")]
pub struct Config {
    /// Whether to strip the space that follows a scale unit when nothing
    /// comes after it.
    ///
    /// With `true` (default): `1000000` -> `"eine Million"`.
    /// With `false`: `1000000` -> `"eine Million "`.
    pub trim_trailing_whitespace: bool,

    /// The number of base-1000 groups a number may occupy.
    ///
    /// A non-zero group at this index or above makes the conversion fail, so
    /// numbers must be below `10^(3 * max_group_count)`. Groups consisting of
    /// leading zeros never count against the limit.
    ///
    /// Must lie in `1..=2000`; 2000 is the largest group count the scale-name
    /// generator can name.
    max_group_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trim_trailing_whitespace: true,
            max_group_count: default_max_group_count(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the maximum number of base-1000 groups.
    #[must_use]
    pub const fn max_group_count(&self) -> usize {
        self.max_group_count
    }

    /// Returns the exclusive upper bound on the number of significant digits.
    #[must_use]
    pub const fn max_digits(&self) -> usize {
        3 * self.max_group_count
    }

    /// Sets the maximum number of base-1000 groups.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or above 2000.
    pub fn set_max_group_count(&mut self, count: usize) -> Result<(), String> {
        self.max_group_count = check_max_group_count(count)?;
        Ok(())
    }
}

const fn default_max_group_count() -> usize {
    MAX_GROUP_COUNT
}

fn check_max_group_count(count: usize) -> Result<usize, String> {
    if (1..=MAX_GROUP_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(format!(
            "max_group_count must be between 1 and {MAX_GROUP_COUNT}, got {count}"
        ))
    }
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_trim")]
        trim_trailing_whitespace: bool,

        /// The number of base-1000 groups a number may occupy.
        #[serde(default = "default_max_group_count")]
        max_group_count: usize,
    },
}

const fn default_trim() -> bool {
    true
}

impl TryFrom<Versions> for Config {
    type Error = String;

    fn try_from(versions: Versions) -> Result<Self, Self::Error> {
        match versions {
            Versions::V1 {
                trim_trailing_whitespace,
                max_group_count,
            } => Ok(Self {
                trim_trailing_whitespace,
                max_group_count: check_max_group_count(max_group_count)?,
            }),
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            trim_trailing_whitespace: config.trim_trailing_whitespace,
            max_group_count: config.max_group_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\ntrim_trailing_whitespace = false\nmax_group_count = 4\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert!(!config.trim_trailing_whitespace);
        assert_eq!(config.max_group_count(), 4);
        assert_eq!(config.max_digits(), 12);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nmax_group_count = \"many\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn load_rejects_group_count_beyond_generator() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nmax_group_count = 2001\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
        assert!(error.contains("max_group_count"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("zahlwort.toml");

        let mut config = Config {
            trim_trailing_whitespace: false,
            ..Config::default()
        };
        config.set_max_group_count(7).unwrap();
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("_version = \"1\""));
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn set_max_group_count_checks_bounds() {
        let mut config = Config::default();
        assert!(config.set_max_group_count(0).is_err());
        assert!(config.set_max_group_count(2001).is_err());
        assert_eq!(config.max_group_count(), 2000);

        config.set_max_group_count(1).unwrap();
        assert_eq!(config.max_digits(), 3);
    }
}

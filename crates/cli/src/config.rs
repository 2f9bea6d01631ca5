//! Optional TOML parameter file.
//!
//! ```toml
//! initial_velocity = 10.0
//! friction_coefficient = 0.3
//! gravity = 9.81
//! ```
//!
//! Every key is optional; missing values fall through to prompting.

use std::{fs, path::Path};

use serde::Deserialize;
use slide_core::validate::Field;
use tracing::debug;

use crate::error::Error;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterFile {
    pub initial_velocity: Option<f64>,
    pub friction_coefficient: Option<f64>,
    pub gravity: Option<f64>,
}

impl ParameterFile {
    /// Reads and parses a parameter file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadConfig`] if the file cannot be read, or
    /// [`Error::ParseConfig`] if it is not a valid parameter file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        let file = Self::parse(&text).map_err(|source| Error::ParseConfig {
            path: path.to_owned(),
            source,
        })?;
        debug!(path = %path.display(), ?file, "loaded parameter file");
        Ok(file)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The value the file provides for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::InitialVelocity => self.initial_velocity,
            Field::FrictionCoefficient => self.friction_coefficient,
            Field::Gravity => self.gravity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_file() {
        let file = ParameterFile::parse(
            "initial_velocity = 10.0\nfriction_coefficient = 0.3\ngravity = 9.81\n",
        )
        .expect("should parse");

        assert_eq!(file.get(Field::InitialVelocity), Some(10.0));
        assert_eq!(file.get(Field::FrictionCoefficient), Some(0.3));
        assert_eq!(file.get(Field::Gravity), Some(9.81));
    }

    #[test]
    fn missing_keys_are_none() {
        let file = ParameterFile::parse("friction_coefficient = 0.5").expect("should parse");

        assert_eq!(file.get(Field::InitialVelocity), None);
        assert_eq!(file.get(Field::FrictionCoefficient), Some(0.5));
        assert_eq!(file.get(Field::Gravity), None);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(ParameterFile::parse("mass = 2.0").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ParameterFile::load(Path::new("/nonexistent/slide.toml")).unwrap_err();
        assert!(matches!(err, Error::ReadConfig { .. }));
        assert!(err.to_string().contains("/nonexistent/slide.toml"));
    }
}

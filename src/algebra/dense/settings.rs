use crate::algebra::{MatrixTriangle, DEFAULT_BLOCK_SIZE};
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings for the dense [`CholeskyEngine`](crate::algebra::CholeskyEngine)

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CholeskySettings {
    /// panel width of the blocked factorization.  Values
    /// of 1 or at least the matrix order give a purely
    /// recursive factorization
    #[builder(default = "DEFAULT_BLOCK_SIZE")]
    pub block_size: usize,

    /// triangle of the input matrix that is referenced
    #[builder(default = "MatrixTriangle::Triu")]
    pub uplo: MatrixTriangle,
}

impl Default for CholeskySettings {
    fn default() -> CholeskySettings {
        CholeskySettingsBuilder::default().build().unwrap()
    }
}

impl CholeskySettings {
    /// Checks the settings for consistency
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.block_size == 0 {
            return Err(SettingsError::BadFieldValue("block_size"));
        }
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for CholeskySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        CholeskySettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl CholeskySettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(0) = self.block_size {
            return Err(SettingsError::BadFieldValue("block_size"));
        }
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    let settings = CholeskySettings::default();
    assert_eq!(settings.block_size, DEFAULT_BLOCK_SIZE);
    assert_eq!(settings.uplo, MatrixTriangle::Triu);
    assert!(settings.validate().is_ok());

    let settings = CholeskySettingsBuilder::default()
        .block_size(16)
        .uplo(MatrixTriangle::Tril)
        .build()
        .unwrap();
    assert_eq!(settings.block_size, 16);
    assert_eq!(settings.uplo, MatrixTriangle::Tril);

    // fail on zero block size
    assert!(CholeskySettingsBuilder::default()
        .block_size(0)
        .build()
        .is_err());

    let mut settings = CholeskySettings::default();
    settings.block_size = 0;
    assert!(settings.validate().is_err());
}

use thiserror::Error;

use crate::exposureweight::exposureweighterror::ExposureWeightError;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration \"{path}\": {source}")]
    IOError {
        path: String,
        source: std::io::Error
    },
    #[error("malformed configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("{field} must be at least 2, got {count}")]
    InvalidSampleCount {
        field: &'static str,
        count: usize
    },
    #[error(transparent)]
    ExposureWeight(#[from] ExposureWeightError)
}

impl ConfigurationError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
        where T: for<'a> serde::Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ConfigurationError::JsonParseError)
    }
}

use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_timeout;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub rps: Option<i64>,
    pub duration: Option<i64>,
    pub timeout: Option<DurationValue>,
    pub max_idle_per_host: Option<usize>,
    pub max_in_flight: Option<usize>,
    pub csv_path: Option<String>,
    pub no_csv: Option<bool>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
}

/// Either a bare number of seconds or a suffixed string such as `"1500ms"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::TimeoutZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_timeout(text),
        }
    }
}

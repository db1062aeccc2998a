#[derive(thiserror::Error, Debug)]
pub enum SalusError {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("invalid target temperature {0}, must be between {min} and {max}", min = crate::MIN_TARGET_TEMPERATURE, max = crate::MAX_TARGET_TEMPERATURE)]
    InvalidTemperature(f64),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("salus login error: `{0}`")]
    LoginError(String),

    #[error("API request {url} failed with status {status}")]
    ApiRequest {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("parser error: `{0}`")]
    ParserError(String),

    #[error("cannot parse json: `{0}`")]
    JsonParseError(#[from] serde_json::Error),
}

impl SalusError {
    /// True if the response body did not match what we expected, regardless
    /// of whether it was the html or the json side that failed.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            SalusError::ParserError(_) | SalusError::JsonParseError(_)
        )
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            SalusError::InvalidCredentials(_) | SalusError::InvalidTemperature(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SalusError>;

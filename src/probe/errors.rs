#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("{0} is not configured in appsettings.json.")]
    MissingConfig(&'static str),

    #[error("ConfigFileError: {0}")]
    ConfigFile(#[from] std::io::Error),

    #[error("JsonError: {0}")]
    Json(#[from] serde_json::Error),

    #[error("InvalidBaseUrl: {0}")]
    InvalidBaseUrl(String),

    #[error("InvalidHeaderError: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("ApiError: {0}")]
    Api(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

use crate::{
    constants::REQUEST_TIMEOUT,
    probe::{ProbeError, Result},
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

/// Default headers sent with every probe request. The API key comes from user
/// configuration, so an unrepresentable value is an error, not a panic.
pub fn default_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert("X-Api-Key", HeaderValue::from_str(api_key)?);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(headers)
}

pub fn build_api_client(headers: HeaderMap) -> Result<Client> {
    Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(ProbeError::from)
}

use super::{errors::Result, outcome::ProbeOutcome, ProbeError};
use crate::{
    config::ValidatedConfig,
    constants::PROBE_ENDPOINT,
    utils::{build_api_client, default_headers},
};
use reqwest::{header::HeaderMap, Client, Url};

/// A client configured for exactly one diagnostic request against the ERP.
///
/// # Example
/// ```ignore
/// let config = ProbeConfig::load_default()?.validated()?;
/// let probe = ConnectivityProbe::new(&config)?;
///
/// let outcome = probe.run().await;
/// println!("{outcome}");
/// ```
#[derive(Debug)]
pub struct ConnectivityProbe {
    api_client: Client,
    base_url: Url,
    probe_url: Url,
    headers: HeaderMap,
}

impl ConnectivityProbe {
    /// Build the probe from validated configuration: base address, default
    /// `X-Api-Key` and `Accept` headers, 30-second timeout. Construction errors
    /// are fatal; nothing touches the network here.
    pub fn new(config: &ValidatedConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ProbeError::InvalidBaseUrl(e.to_string()))?;

        // A rooted join, so `/customer` resolves against the host regardless
        // of any path on the base address.
        let probe_url = base_url
            .join(PROBE_ENDPOINT)
            .map_err(|e| ProbeError::InvalidBaseUrl(e.to_string()))?;

        let headers = default_headers(&config.api_key)?;
        let api_client = build_api_client(headers.clone())?;

        Ok(Self {
            api_client,
            base_url,
            probe_url,
            headers,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The default headers joined as `name: value, name: value` for the
    /// diagnostic banner.
    pub fn header_summary(&self) -> String {
        self.headers
            .iter()
            .map(|(name, value)| {
                format!("{}: {}", name, value.to_str().unwrap_or("<opaque>"))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Issue the single GET request to `/customer` relative to the base
    /// address. Request failures come back as [ProbeOutcome], never as `Err`;
    /// the response body is not read.
    pub async fn run(&self) -> ProbeOutcome {
        tracing::info!("Probing {}", self.probe_url);

        match self.api_client.get(self.probe_url.clone()).send().await {
            Ok(response) if response.status().is_success() => ProbeOutcome::Success,
            Ok(response) => ProbeOutcome::Failed(response.status()),
            Err(e) => {
                tracing::warn!("Probe request failed: {e:?}");
                ProbeOutcome::Unreachable(e)
            }
        }
    }
}

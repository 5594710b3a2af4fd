use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "appsettings.json";

pub const PROBE_ENDPOINT: &str = "/customer";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

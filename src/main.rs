use erp_probe::{
    config::ProbeConfig,
    probe::{ConnectivityProbe, Result},
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    // Missing or empty configuration is fatal and must fail before any
    // network activity.
    let config = ProbeConfig::load_default()?.validated()?;
    let probe = ConnectivityProbe::new(&config)?;

    println!("HttpClient configured successfully.");

    println!("Iniciando solicitud al endpoint 'customer'...");
    println!("Base URL: {}", probe.base_url());
    println!("Headers: {}", probe.header_summary());

    // Request failures are printed, not propagated; the process exits
    // normally either way.
    let outcome = probe.run().await;
    println!("{outcome}");

    Ok(())
}

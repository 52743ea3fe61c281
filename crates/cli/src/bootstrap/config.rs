use dnslink_router_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        proxies = config.routing.proxies.len(),
        cache_ttl_secs = config.routing.cache_ttl().as_secs(),
        nameservers = ?config.resolver.nameservers,
        "Configuration loaded"
    );

    Ok(config)
}

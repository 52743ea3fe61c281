//! # DNSLink Router
//!
//! Command-line front end for the DNSLink routing engine: resolve a host's
//! DNSLink and decide where a request for it should be proxied.

mod bootstrap;
mod di;

use clap::{Parser, Subcommand};
use dnslink_router_domain::{normalize_host, CliOverrides, RoutingDecision};
use tracing::info;

use bootstrap::{init_logging, load_config};
use di::Services;

#[derive(Parser)]
#[command(name = "dnslink-router")]
#[command(version = "0.1.0")]
#[command(about = "Routes requests to content-addressed upstreams based on DNSLink records")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, global = true)]
    log_level: Option<String>,

    /// Override the DNSLink cache TTL in seconds
    #[arg(long, global = true)]
    cache_ttl: Option<u64>,

    /// Override the nameserver list (repeatable)
    #[arg(long = "nameserver", global = true)]
    nameservers: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decide how a request for HOST and PATH is routed
    Decide {
        #[arg(long)]
        host: String,

        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Look up the DNSLink published for HOST
    Resolve {
        #[arg(long)]
        host: String,
    },
    /// Validate the configuration and print the routing table
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        log_level: cli.log_level,
        cache_ttl: cli.cache_ttl,
        nameservers: (!cli.nameservers.is_empty()).then_some(cli.nameservers),
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    match cli.command {
        Command::CheckConfig => {
            let rules = config.routing.to_rule();
            println!("cache_ttl: {}s", rules.cache_ttl().as_secs());
            println!("nameservers: {}", config.resolver.nameservers.join(", "));
            if rules.is_empty() {
                println!("no proxies configured");
            }
            for (prefix, upstream) in rules.upstreams() {
                match rules.replacement_for(prefix) {
                    Some(replacement) => println!("{prefix} -> {upstream} (as {replacement})"),
                    None => println!("{prefix} -> {upstream}"),
                }
            }
        }
        Command::Resolve { host } => {
            let services = Services::new(&config)?;
            let host = normalize_host(&host);
            match services.resolver.resolve(&host).await? {
                Some(link) => println!("{link}"),
                None => println!("no dnslink"),
            }
        }
        Command::Decide { host, path } => {
            let services = Services::new(&config)?;
            match services.decide_route.execute(&host, &path).await {
                RoutingDecision::Matched {
                    upstream,
                    rewritten_path,
                } => println!("match {upstream} {rewritten_path}"),
                RoutingDecision::NoMatch => println!("pass-through"),
            }
            info!(stats = ?services.cache.stats(), "DNSLink cache statistics");
        }
    }

    Ok(())
}

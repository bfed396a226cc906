use std::net::IpAddr;

use clap::{Args, Parser};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: IpAddr,
    #[command(flatten)]
    pub build: BuildSettings,
}

/// Build and deployment identifiers supplied by deployment tooling.
///
/// Values are passed through to the diagnostics page as-is. Only `build_hash`
/// is ever derived from, everything else is display-only and may be absent.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSettings {
    #[arg(long, env = "ENVIRONMENT")]
    pub environment: Option<String>,
    #[arg(long, env = "APPLICATION_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    pub application_version: Option<String>,
    #[arg(long, env = "BUILD_NUMBER")]
    pub build_number: Option<String>,
    #[arg(long, env = "BUILD_HASH")]
    pub build_hash: Option<String>,
    #[arg(long, env = "BUILD_DATE")]
    pub build_date: Option<String>,
    #[arg(long, env = "BUILD_URL")]
    pub build_url: Option<String>,
    #[arg(long, env = "DEPLOY_NUMBER")]
    pub deploy_number: Option<String>,
    #[arg(long, env = "DEPLOY_DATE")]
    pub deploy_date: Option<String>,
    #[arg(long, env = "DEPLOY_URL")]
    pub deploy_url: Option<String>,
    #[arg(long, env = "OCTOPUS_RELEASE_NUMBER")]
    pub release_number: Option<String>,
    #[arg(long, env = "OCTOPUS_DEPLOYMENT_ID")]
    pub deployment_id: Option<String>,
}

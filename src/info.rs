//! Diagnostics model for the home page.
//!
//! Everything shown on the page is assembled per request from three read-only
//! inputs: the configured [`BuildSettings`], the [`RuntimeInfo`] fixed at
//! compile time, and a [`HostSnapshot`] of the machine name and process
//! environment. [`InfoPage::assemble`] never touches global process state, so
//! tests can feed it any snapshot they like.

use serde::Serialize;
use tracing::debug;

use crate::{config::BuildSettings, error::Error};

const SHORT_HASH_LEN: usize = 8;

/// Build/deploy identifiers as displayed. Absent settings stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub environment: Option<String>,
    pub application_version: Option<String>,
    pub build_number: Option<String>,
    pub build_hash: String,
    pub short_build_hash: String,
    pub build_date: Option<String>,
    pub build_url: Option<String>,
    pub deploy_number: Option<String>,
    pub deploy_date: Option<String>,
    pub deploy_url: Option<String>,
    pub release_number: Option<String>,
    pub deployment_id: Option<String>,
}

impl BuildInfo {
    pub fn from_settings(settings: &BuildSettings) -> Result<Self, Error> {
        let build_hash = settings
            .build_hash
            .clone()
            .ok_or(Error::ConfigurationMissing { key: "BuildHash" })?;
        let short_build_hash = short_hash(&build_hash)?.to_owned();

        Ok(Self {
            environment: settings.environment.clone(),
            application_version: settings.application_version.clone(),
            build_number: settings.build_number.clone(),
            build_hash,
            short_build_hash,
            build_date: settings.build_date.clone(),
            build_url: settings.build_url.clone(),
            deploy_number: settings.deploy_number.clone(),
            deploy_date: settings.deploy_date.clone(),
            deploy_url: settings.deploy_url.clone(),
            release_number: settings.release_number.clone(),
            deployment_id: settings.deployment_id.clone(),
        })
    }
}

/// First eight characters of `hash`. Shorter hashes are an error rather than
/// being shown truncated.
pub fn short_hash(hash: &str) -> Result<&str, Error> {
    match hash.char_indices().nth(SHORT_HASH_LEN) {
        Some((end, _)) => Ok(&hash[..end]),
        None => {
            let len = hash.chars().count();
            if len == SHORT_HASH_LEN {
                Ok(hash)
            } else {
                Err(Error::BuildHashTooShort { len })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeInfo {
    pub hostname: String,
    pub runtime_name: &'static str,
    pub runtime_version: &'static str,
    pub framework_name: &'static str,
    pub framework_version: String,
    pub target: &'static str,
}

impl RuntimeInfo {
    /// Runtime identity of this binary running on `hostname`.
    pub fn current(hostname: String) -> Self {
        Self {
            hostname,
            runtime_name: "Rust",
            runtime_version: env!("WEBAPP_RUSTC_VERSION"),
            framework_name: "axum",
            framework_version: major_minor(env!("WEBAPP_AXUM_VERSION")),
            target: env!("WEBAPP_TARGET"),
        }
    }
}

fn major_minor(version: &str) -> String {
    let mut parts = version.splitn(3, '.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{major}.{minor}"),
        _ => version.to_owned(),
    }
}

/// Read-only capture of the host the process is running on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSnapshot {
    pub hostname: String,
    pub vars: Vec<(String, String)>,
}

impl HostSnapshot {
    pub fn capture() -> Self {
        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "unknown".to_owned());

        let vars = std::env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect();

        Self { hostname, vars }
    }
}

/// Environment as `KEY = VALUE` lines, sorted by the formatted line.
pub fn environment_var_list(vars: &[(String, String)]) -> Vec<String> {
    let mut list: Vec<String> = vars
        .iter()
        .map(|(key, value)| {
            let line = format!("{key} = {value}");
            debug!("{line}");
            line
        })
        .collect();
    list.sort();
    list
}

/// Everything the diagnostics page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoPage {
    pub build: BuildInfo,
    pub runtime: RuntimeInfo,
    pub environment_variables: Vec<String>,
}

impl InfoPage {
    pub fn assemble(settings: &BuildSettings, host: &HostSnapshot) -> Result<Self, Error> {
        let build = BuildInfo::from_settings(settings)?;
        let runtime = RuntimeInfo::current(host.hostname.clone());
        let environment_variables = environment_var_list(&host.vars);

        Ok(Self {
            build,
            runtime,
            environment_variables,
        })
    }
}

//! Server configuration: Leptos site options plus `HOST`/`PORT` overrides.
//!
//! Site options come from `[[workspace.metadata.leptos]]` (or the
//! `LEPTOS_*` variables cargo-leptos exports). `HOST` and `PORT`, when set,
//! replace the IP and port of the configured site address.

use std::net::{IpAddr, SocketAddr};

use leptos::config::{LeptosOptions, get_configuration};

use crate::error::ServerError;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos_options: LeptosOptions,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Load Leptos options and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Configuration`] when the Leptos metadata cannot
    /// be read, and [`ServerError::InvalidEnv`] for a malformed override.
    pub fn load() -> Result<Self, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Configuration(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        let addr = resolve_addr(leptos_options.site_addr, host.as_deref(), port.as_deref())?;
        Ok(Self { leptos_options, addr })
    }
}

/// Apply optional `HOST`/`PORT` values to `configured`.
///
/// Blank values count as unset.
///
/// # Errors
///
/// Returns [`ServerError::InvalidEnv`] naming the variable that failed to parse.
pub fn resolve_addr(configured: SocketAddr, host: Option<&str>, port: Option<&str>) -> Result<SocketAddr, ServerError> {
    let mut addr = configured;
    if let Some(raw) = host.map(str::trim).filter(|v| !v.is_empty()) {
        let ip = raw
            .parse::<IpAddr>()
            .map_err(|_| ServerError::InvalidEnv { var: "HOST", value: raw.to_string() })?;
        addr.set_ip(ip);
    }
    if let Some(raw) = port.map(str::trim).filter(|v| !v.is_empty()) {
        let port = raw
            .parse::<u16>()
            .map_err(|_| ServerError::InvalidEnv { var: "PORT", value: raw.to_string() })?;
        addr.set_port(port);
    }
    Ok(addr)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! Runtime Configuration
//!
//! Resolved once at startup from the hosting page.

use crate::money;

/// How long a toast stays visible
pub const TOAST_DURATION_MS: u32 = 3000;
/// Fade-out transition before a resolved order leaves the pending list
pub const FADE_OUT_MS: u32 = 400;
/// `<meta name="comandas-api" content="https://...">` overrides the API origin
pub const API_META_NAME: &str = "comandas-api";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL for HTTP calls, without trailing slash
    pub api_base: String,
    /// Socket.IO server URL
    pub socket_url: String,
    pub thousands_separator: char,
    pub toast_ms: u32,
    pub fade_ms: u32,
}

impl Config {
    pub fn new(origin: &str, api_override: Option<&str>, language: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        let api_base = api_override
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/'))
            .unwrap_or(origin);
        Self {
            api_base: api_base.to_string(),
            socket_url: origin.to_string(),
            thousands_separator: money::thousands_separator(language),
            toast_ms: TOAST_DURATION_MS,
            fade_ms: FADE_OUT_MS,
        }
    }

    /// Read origin, meta override and language from the browser
    pub fn from_window() -> Self {
        let window = web_sys::window();
        let origin = window
            .as_ref()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let language = window
            .as_ref()
            .and_then(|w| w.navigator().language())
            .unwrap_or_default();
        let api_override = window
            .as_ref()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{}\"]", API_META_NAME))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));
        Self::new(&origin, api_override.as_deref(), &language)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_page_origin() {
        let config = Config::new("http://127.0.0.1:5000", None, "es-CO");
        assert_eq!(config.api_base, "http://127.0.0.1:5000");
        assert_eq!(config.socket_url, "http://127.0.0.1:5000");
        assert_eq!(config.thousands_separator, '.');
        assert_eq!(config.toast_ms, 3000);
        assert_eq!(config.fade_ms, 400);
    }

    #[test]
    fn test_meta_override() {
        let config = Config::new("http://localhost:8080", Some("https://api.example.com/"), "en");
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.socket_url, "http://localhost:8080");
        assert_eq!(config.thousands_separator, ',');
    }

    #[test]
    fn test_blank_override_ignored() {
        let config = Config::new("http://localhost:5000/", Some("  "), "es");
        assert_eq!(config.api_base, "http://localhost:5000");
    }

    #[test]
    fn test_endpoint_join() {
        let config = Config::new("http://localhost:5000", None, "es");
        assert_eq!(config.endpoint("/crear_pedido"), "http://localhost:5000/crear_pedido");
        assert_eq!(
            config.endpoint("api/pedidos_pendientes"),
            "http://localhost:5000/api/pedidos_pendientes"
        );
    }
}

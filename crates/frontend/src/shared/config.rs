//! Remote store endpoint configuration.
//!
//! Resolved once per session from `<meta>` tags in the host document,
//! falling back to the window origin for same-host deployments.

use once_cell::sync::OnceCell;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    /// Public (anonymous) API key sent with every request.
    pub anon_key: String,
}

static CONFIG: OnceCell<StoreConfig> = OnceCell::new();

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name='{}']", name))
        .ok()??;
    element.get_attribute("content").filter(|c| !c.is_empty())
}

fn window_origin() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, hostname)
}

pub fn store() -> &'static StoreConfig {
    CONFIG.get_or_init(|| StoreConfig {
        base_url: meta_content("store-url").unwrap_or_else(window_origin),
        anon_key: meta_content("store-anon-key").unwrap_or_default(),
    })
}

/// REST endpoint of a named table.
pub fn rest_url(table: &str) -> String {
    format!("{}/rest/v1/{}", store().base_url, table)
}

/// Endpoint of the auth provider.
pub fn auth_url(path: &str) -> String {
    format!("{}/auth/v1/{}", store().base_url, path)
}

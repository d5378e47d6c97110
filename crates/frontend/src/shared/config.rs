use contracts::shared::config::{default_site_config, parse_site_config, SiteConfig};

/// Id of the optional inline config block:
/// `<script type="application/toml" id="site-config">...</script>`
const CONFIG_ELEMENT_ID: &str = "site-config";

/// Load the site configuration.
///
/// Search order:
/// 1. Inline TOML block in the host page (per-deployment overrides)
/// 2. Falls back to the embedded default config
pub fn load_site_config() -> anyhow::Result<SiteConfig> {
    if let Some(contents) = inline_config() {
        log::info!("Loading site config from #{}", CONFIG_ELEMENT_ID);
        match parse_site_config(&contents) {
            Ok(config) => return Ok(config),
            Err(err) => log::warn!("Ignoring inline site config: {:#}", err),
        }
    }

    log::info!("Using default embedded configuration");
    default_site_config()
}

fn inline_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|contents| !contents.trim().is_empty())
}

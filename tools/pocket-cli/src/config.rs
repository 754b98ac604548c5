//! CLI configuration files.

use std::path::Path;

use anyhow::{Context, Result};
use pocket_commerce::StorefrontConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["pocket.toml", ".pocket.toml", "pocket.json"];

/// Load a storefront config from a TOML or JSON file.
pub fn load(path: &Path) -> Result<StorefrontConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: StorefrontConfig = if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Save a storefront config, choosing the format from the extension.
pub fn save(config: &StorefrontConfig, path: &Path) -> Result<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a commented default pocket.toml.
pub fn generate_default_config() -> String {
    let defaults = StorefrontConfig::default();
    format!(
        r#"# Pocket Diner storefront configuration

[menu]
# Items per menu page
page_size = {page_size}
# Item ids listed by `pocket featured`, in order
featured = [{featured}]

[cart]
currency = "{currency}"
# What adding an item already in the cart does: "increment" or "ignore"
duplicate_adds = "increment"
placeholder_image_url = "{placeholder}"

[checkout]
order_prefix = "{prefix}"
estimated_time = "{estimated_time}"
redirect_delay_ms = {redirect_delay_ms}
"#,
        page_size = defaults.menu.page_size,
        featured = defaults
            .menu
            .featured
            .iter()
            .map(|id| format!("{:?}", id.as_str()))
            .collect::<Vec<_>>()
            .join(", "),
        currency = defaults.cart.currency.code(),
        placeholder = defaults.cart.placeholder_image_url,
        prefix = defaults.checkout.order_prefix,
        estimated_time = defaults.checkout.estimated_time,
        redirect_delay_ms = defaults.checkout.redirect_delay_ms,
    )
}

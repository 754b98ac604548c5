//! Configuration management commands.

use std::fs;

use anyhow::{anyhow, bail, Context as _, Result};
use pocket_commerce::{Storefront, StorefrontConfig};
use serde_json::Value;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{self, generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[menu]");
    ctx.output.kv("page_size", &config.menu.page_size.to_string());
    ctx.output.kv("featured", &to_value_string(&config.menu.featured)?);

    ctx.output.info("[cart]");
    ctx.output.kv("currency", config.cart.currency.code());
    ctx.output.kv("duplicate_adds", &to_value_string(&config.cart.duplicate_adds)?);
    ctx.output.kv("placeholder_image_url", &config.cart.placeholder_image_url);

    ctx.output.info("[checkout]");
    ctx.output.kv("order_prefix", &config.checkout.order_prefix);
    ctx.output.kv("estimated_time", &config.checkout.estimated_time);
    ctx.output.kv(
        "redirect_delay_ms",
        &config.checkout.redirect_delay_ms.to_string(),
    );

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let path = ctx
        .config_path
        .clone()
        .ok_or_else(|| anyhow!("No config file found. Run `pocket config init` to create one."))?;

    let mut config = config::load(&path)?;
    set_config_value(&mut config, key, value)?;
    Storefront::with_builtin_menu(config.clone())
        .context("Refusing to save invalid configuration")?;
    config::save(&config, &path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    Storefront::with_builtin_menu(ctx.config.clone()).context("Configuration is invalid")?;

    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.menu.page_size > 48 {
        warnings.push(format!(
            "menu.page_size {} will make a very long menu page",
            ctx.config.menu.page_size
        ));
    }
    if ctx.config.menu.featured.is_empty() {
        warnings.push("menu.featured is empty; `pocket featured` will show nothing".to_string());
    }
    if ctx.config.cart.placeholder_image_url.trim().is_empty() {
        warnings.push("cart.placeholder_image_url is empty".to_string());
    }
    if ctx.config.checkout.estimated_time.trim().is_empty() {
        warnings.push("checkout.estimated_time is empty".to_string());
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn to_value_string<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(match serde_json::to_value(value)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Look up a dot-separated key such as `checkout.order_prefix`.
fn get_config_value(config: &StorefrontConfig, key: &str) -> Result<Value> {
    let mut current = serde_json::to_value(config)?;
    for part in key.split('.') {
        current = match current {
            Value::Object(mut map) => map
                .remove(part)
                .ok_or_else(|| anyhow!("Unknown config key: {}", key))?,
            _ => bail!("Unknown config key: {}", key),
        };
    }
    if current.is_object() {
        bail!("{} is a section, not a value", key);
    }
    Ok(current)
}

/// Set a dot-separated key, parsing `value` as JSON when it looks like a number
/// or boolean and as a string otherwise.
fn set_config_value(config: &mut StorefrontConfig, key: &str, value: &str) -> Result<()> {
    let current = get_config_value(config, key)?;
    let new_value = match current {
        Value::String(_) => Value::String(value.to_string()),
        _ => serde_json::from_str(value)
            .with_context(|| format!("Invalid value for {}: {}", key, value))?,
    };

    let mut root = serde_json::to_value(&*config)?;
    let mut slot = &mut root;
    for part in key.split('.') {
        slot = slot
            .get_mut(part)
            .ok_or_else(|| anyhow!("Unknown config key: {}", key))?;
    }
    *slot = new_value;

    *config = serde_json::from_value(root)
        .with_context(|| format!("Invalid value for {}: {}", key, value))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_commerce::cart::DuplicateAddPolicy;

    #[test]
    fn test_get_config_value() {
        let config = StorefrontConfig::default();
        assert_eq!(get_config_value(&config, "menu.page_size").unwrap(), Value::from(8));
        assert_eq!(
            get_config_value(&config, "checkout.order_prefix").unwrap(),
            Value::from("DORA")
        );
        assert!(get_config_value(&config, "menu").is_err());
        assert!(get_config_value(&config, "menu.nope").is_err());
    }

    #[test]
    fn test_set_config_value() {
        let mut config = StorefrontConfig::default();
        set_config_value(&mut config, "menu.page_size", "4").unwrap();
        set_config_value(&mut config, "cart.duplicate_adds", "ignore").unwrap();
        set_config_value(&mut config, "checkout.order_prefix", "POCKET").unwrap();

        assert_eq!(config.menu.page_size, 4);
        assert_eq!(config.cart.duplicate_adds, DuplicateAddPolicy::Ignore);
        assert_eq!(config.checkout.order_prefix, "POCKET");

        set_config_value(&mut config, "menu.featured", r#"["dr1", "d3"]"#).unwrap();
        let featured: Vec<&str> = config.menu.featured.iter().map(|id| id.as_str()).collect();
        assert_eq!(featured, vec!["dr1", "d3"]);
    }

    #[test]
    fn test_set_config_value_rejects_bad_values() {
        let mut config = StorefrontConfig::default();
        assert!(set_config_value(&mut config, "menu.page_size", "many").is_err());
        assert!(set_config_value(&mut config, "cart.duplicate_adds", "double").is_err());
        assert!(set_config_value(&mut config, "cart.currency", "XYZ").is_err());
        assert_eq!(config, StorefrontConfig::default());
    }
}

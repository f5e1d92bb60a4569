//! Project initialization module.
//!
//! Creates a new project skeleton: default configuration, a starter
//! template carrying the title placeholder, and an empty demon list.

use crate::{
    config::{SiteConfig, defaults},
    data::DemonList,
    generate::TITLE_ANCHOR,
    log,
};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "demongen.toml";

/// Create a new project with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `demongen init <NAME>` to create in a subdirectory."
        );
    }

    init_default_config(root)?;
    init_data_file(root)?;
    init_template(root, config)?;

    log!("init"; "created project skeleton in `{}`", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    ensure_fresh(&path)?;

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create {}", root.display()))?;
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(path, content)?;
    Ok(())
}

/// Write an empty demon list at the default data path
fn init_data_file(root: &Path) -> Result<()> {
    let path = root.join(defaults::build::data());
    ensure_fresh(&path)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(&DemonList::default())?;
    fs::write(path, content)?;
    Ok(())
}

/// Write the starter template at the default template path
fn init_template(root: &Path, config: &SiteConfig) -> Result<()> {
    let path = root.join(defaults::build::template());
    ensure_fresh(&path)?;

    fs::write(path, default_template(config))?;
    Ok(())
}

/// Refuse to overwrite files a previous init (or the user) put in place
fn ensure_fresh(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "Path `{}` already exists. Try `demongen init <NAME>` instead.",
            path.display()
        );
    }
    Ok(())
}

/// Starter template: the title placeholder plus the configured site header.
fn default_template(config: &SiteConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{description}">
    {TITLE_ANCHOR}
</head>
<body>
    <header>
        <h1>{title}</h1>
    </header>
    <main>
        <section class="demon"></section>
    </main>
</body>
</html>
"#,
        description = config.base.description,
        title = config.base.title,
    )
}

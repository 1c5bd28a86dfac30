use anyhow::{Context, Result};
use rollcall_runtime::Config;
use std::path::Path;

pub fn show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to(path)
        .with_context(|| format!("failed to write config to {}", path.display()))?;

    println!("Wrote default config to {}", path.display());
    Ok(())
}

use anyhow::Result;
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Diskgauge Configuration

[tools]
# Path or name of the smartctl binary (resolved against PATH)
smartctl_path = "smartctl"

[display]
# Disable the animation and color
plain = false
# Progress bar width in cells
bar_width = 30
"#;

    std::fs::write(&config_path, default_config)?;
    println!("Created {CONFIG_FILE} configuration file");

    Ok(())
}

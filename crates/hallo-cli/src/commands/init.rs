use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Prefix shown before the process id: (worker/1234)
# prefix = "worker"

# Print YYYY-MM-DD HH:MM:SS instead of HH:MM:SS
with_date = false

# Force colors on or off (default: decided by the terminal)
# color = true

# Manifest with `name` and `version` read by `hallo ready`
# Cargo.toml manifests are supported as well
manifest = "package.json"

# Options listed under the ready banner, in this order
[options]
# port = "8080"
# mode = "development"
"#;

/// Creates the configuration file
pub fn execute_init(path: &str) -> Result<()> {
    let config_path = Path::new(path);
    if config_path.exists() {
        anyhow::bail!("Config file already exists: {}", path);
    }

    fs::write(config_path, CONFIG_TEMPLATE)?;
    println!("Created config file: {}", path);

    Ok(())
}

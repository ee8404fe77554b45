use anyhow::Result;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"[logging]
# Minimum severity forwarded to the backend: trace, debug, info, warn, error, fatal
level = "info"

# Backend filter directive (RUST_LOG overrides it)
# filter = "levelgate=trace"

# Log file, relative to this file (optional)
# file = "logs/levelgate.log"

console = true
format = "text"

# Display flags
time = true
show_level = true

# SQL log switch: on or off
sql = "on"
"#;

/// Creates the configuration file
pub fn execute_init(path: &str) -> Result<()> {
    let config_path = Path::new(path);
    if config_path.exists() {
        anyhow::bail!("Config file already exists: {}", path);
    }

    fs::write(config_path, DEFAULT_CONFIG)?;
    println!("Created config file: {}", path);

    Ok(())
}

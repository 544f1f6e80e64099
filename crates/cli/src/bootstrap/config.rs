use pagevisits_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, overrides).map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// The file the configuration was read from, if any.
pub fn config_source(path: Option<&str>) -> Option<String> {
    path.map(str::to_string).or_else(Config::get_config_path)
}

//! Where the CLI looks for its config when `--config` is not given.

use std::path::PathBuf;

const APP_DIR: &str = "luklak";
const CONFIG_FILE: &str = "config.json";

/// `<config dir>/luklak/config.json`, or `None` when the platform has no
/// config directory.
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_under_app_dir() {
        if let Some(path) = default_config_file() {
            assert!(path.ends_with("luklak/config.json"));
        }
    }
}

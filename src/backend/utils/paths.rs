//! Path utilities.

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Name of the application data directory.
const APP_DIR: &str = "SwapSeva";

/// Name of the configuration file inside the data directory.
const CONFIG_FILE: &str = "config.json";

/// Get the base data directory (`SwapSeva`).
#[inline]
pub fn get_data_dir() -> Result<PathBuf> {
    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("HOME")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

#[inline]
pub fn get_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// File backing a store entry. Keys are reduced to `[A-Za-z0-9_-]`.
pub fn get_entry_path(data_dir: &Path, key: &str) -> PathBuf {
    let sanitized: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    data_dir.join(format!("{sanitized}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_path_uses_key_as_file_stem() {
        let path = get_entry_path(Path::new("/tmp/swapseva"), "user");
        assert_eq!(path, PathBuf::from("/tmp/swapseva/user.json"));
    }

    #[test]
    fn entry_path_cannot_escape_data_dir() {
        let path = get_entry_path(Path::new("/tmp/swapseva"), "../etc/passwd");
        assert_eq!(path, PathBuf::from("/tmp/swapseva/___etc_passwd.json"));
    }

    #[test]
    fn config_lives_in_data_dir() {
        let path = get_config_path(Path::new("/tmp/swapseva"));
        assert!(path.ends_with("config.json"));
    }
}

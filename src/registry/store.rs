use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::model::FolderRegistry;

/// On-disk shape of the registry: a single `folders` list.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vivace/folders.toml` or
/// `~/.config/vivace/folders.toml`, overridable via `VIVACE_STATE_PATH`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedFolders {
    #[serde(default)]
    pub folders: Vec<PathBuf>,
}

/// Resolve the registry path from `VIVACE_STATE_PATH` or XDG defaults.
pub fn resolve_state_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("VIVACE_STATE_PATH") {
        return Some(PathBuf::from(p));
    }
    default_state_path()
}

/// Compute the default registry path under `$XDG_CONFIG_HOME/vivace/folders.toml`
/// or `~/.config/vivace/folders.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_state_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("vivace").join("folders.toml"))
}

/// Load the registry from `path`.
///
/// A missing file means "no folders yet". A file that cannot be read or
/// parsed also degrades to an empty registry: losing the folder list is
/// recoverable (the user re-adds folders), aborting startup is not.
pub fn load(path: &Path) -> FolderRegistry {
    if !path.exists() {
        return FolderRegistry::new();
    }

    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read folder registry, starting empty");
            return FolderRegistry::new();
        }
    };

    match toml::from_str::<PersistedFolders>(&contents) {
        Ok(persisted) => FolderRegistry::from_folders(persisted.folders),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "corrupt folder registry, starting empty");
            FolderRegistry::new()
        }
    }
}

/// Write the whole registry to `path`, creating parent directories as needed.
pub fn save(path: &Path, registry: &FolderRegistry) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let persisted = PersistedFolders {
        folders: registry.folders().to_vec(),
    };
    let contents = toml::to_string_pretty(&persisted).context("serializing folder registry")?;
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

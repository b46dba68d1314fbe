use std::path::{Path, PathBuf};

/// Environment variable that points at an explicit settings file.
pub const CONFIG_ENV_VAR: &str = "HISTORICAL_TIMELINE_CONFIG";
pub const CONFIG_FILE_NAME: &str = "timeline.json";

fn resource_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            roots.push(parent.to_path_buf());
        }
    }
    let manifest_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    if manifest_root.exists() {
        roots.push(manifest_root);
    }
    roots
}

/// Resolve a relative path against the executable directory, then the crate
/// root. Falls back to the first root when nothing exists yet.
pub fn resolve_resource_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let roots = resource_roots();
    for root in &roots {
        let candidate = root.join(path);
        if candidate.exists() {
            return candidate;
        }
    }
    roots
        .first()
        .map(|root| root.join(path))
        .unwrap_or_else(|| path.to_path_buf())
}

/// Location of the settings file: the env override when set, otherwise
/// `timeline.json` next to the executable or in the crate root.
pub fn config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => resolve_resource_path(Path::new(CONFIG_FILE_NAME)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_paths_are_kept() {
        let absolute = std::env::temp_dir().join("dataset.json");
        assert_eq!(resolve_resource_path(&absolute), absolute);
    }

    #[test]
    fn test_existing_relative_path_resolves_to_root() {
        let resolved = resolve_resource_path(Path::new("Cargo.toml"));
        assert!(resolved.is_absolute() || resolved.exists());
        assert!(resolved.ends_with("Cargo.toml"));
    }
}

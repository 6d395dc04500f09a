//! Runtime configuration shared by the host providers.
//!
//! Centralizes environment overrides and PATH resolution so every provider
//! finds the `sw_vers` utility the same way.

use std::env;
use std::path::{Path, PathBuf};

/// Environment override for the `sw_vers` executable.
pub const SW_VERS_ENV: &str = "MACOS_RELEASES_SW_VERS";

const SW_VERS: &str = "sw_vers";
const SW_VERS_FALLBACK: &str = "/usr/bin/sw_vers";

/// Returns true when a file exists and has any execute bit set.
pub fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = std::fs::metadata(path) {
            return meta.permissions().mode() & 0o111 != 0;
        }
        false
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Find an executable by name somewhere on PATH.
pub fn find_on_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    for dir in env::split_paths(&paths) {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Value of `name` when set to a non-empty string.
pub fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

/// Resolve the `sw_vers` executable.
///
/// Search order: `MACOS_RELEASES_SW_VERS`, then `sw_vers` on PATH, then the
/// stock `/usr/bin/sw_vers`. The fallback is returned even when missing so
/// the spawn error names a concrete path.
pub fn sw_vers_command() -> PathBuf {
    sw_vers_command_from(env_non_empty(SW_VERS_ENV))
}

fn sw_vers_command_from(override_value: Option<String>) -> PathBuf {
    if let Some(path) = override_value {
        return PathBuf::from(path);
    }
    find_on_path(SW_VERS).unwrap_or_else(|| PathBuf::from(SW_VERS_FALLBACK))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_path_search() {
        assert_eq!(
            sw_vers_command_from(Some("/opt/fake/sw_vers".to_string())),
            PathBuf::from("/opt/fake/sw_vers")
        );
    }

    #[test]
    fn default_resolution_names_sw_vers() {
        let resolved = sw_vers_command_from(None);
        assert_eq!(resolved.file_name().and_then(|n| n.to_str()), Some("sw_vers"));
    }

    #[test]
    fn missing_files_are_not_executable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_executable(&dir.path().join("absent")));
        assert!(!is_executable(dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn execute_bit_is_required() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("tool");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!is_executable(&script));
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert!(is_executable(&script));
    }
}

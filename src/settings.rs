//! Site list loading.
//!
//! Reads the hostnames to probe from a JSON settings file of the form
//! `{ "sites": ["example.com", "example.org"] }`. The key is matched without
//! regard to case (`"Sites"` works too); other keys are ignored.

use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};
use serde_json::{Map, Value};

use crate::error_handling::SettingsError;

const SITES_KEY: &str = "sites";

/// Loads the ordered list of hostnames from `path`.
///
/// A missing file and a missing or `null` `sites` key both yield an empty
/// list. Entries are trimmed; order and duplicates are kept as written.
///
/// # Errors
///
/// Returns `SettingsError` if the file cannot be read, is not valid JSON, or
/// contains an entry that is not a bare hostname.
pub fn load_sites(path: &Path) -> Result<Vec<String>, SettingsError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("Settings file {} not found, no sites configured", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let parse_error = |source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let settings: Map<String, Value> = serde_json::from_str(&raw).map_err(parse_error)?;
    let listed = match settings
        .into_iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(SITES_KEY))
    {
        Some((_, value)) => {
            serde_json::from_value::<Option<Vec<String>>>(value).map_err(parse_error)?
        }
        None => None,
    };

    let sites = listed
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, site)| validate_site(index, &site))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Loaded {} site(s) from {}", sites.len(), path.display());
    Ok(sites)
}

/// Checks that a configured entry is a bare hostname and returns it trimmed.
fn validate_site(index: usize, site: &str) -> Result<String, SettingsError> {
    let trimmed = site.trim();
    let invalid = |reason| SettingsError::InvalidSite {
        index,
        site: site.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("entry is empty"));
    }
    if trimmed.contains("://") {
        return Err(invalid("entry must be a bare hostname without a scheme"));
    }
    if trimmed.contains('/') {
        return Err(invalid("entry must be a bare hostname without a path"));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_load_sites_keeps_order_and_duplicates() {
        let file = settings_file(r#"{ "sites": ["b.example", "a.example", "b.example"] }"#);
        let sites = load_sites(file.path()).expect("valid settings");
        assert_eq!(sites, vec!["b.example", "a.example", "b.example"]);
    }

    #[test]
    fn test_load_sites_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let sites = load_sites(&dir.path().join("appsettings.json")).expect("missing file tolerated");
        assert!(sites.is_empty());
    }

    #[test]
    fn test_load_sites_missing_or_null_key_is_empty() {
        let file = settings_file(r#"{ "Logging": { "LogLevel": "Warning" } }"#);
        assert!(load_sites(file.path()).expect("valid settings").is_empty());

        let file = settings_file(r#"{ "sites": null }"#);
        assert!(load_sites(file.path()).expect("valid settings").is_empty());
    }

    #[test]
    fn test_load_sites_key_is_case_insensitive() {
        let file = settings_file(r#"{ "Sites": ["example.com", "example.org"] }"#);
        let sites = load_sites(file.path()).expect("valid settings");
        assert_eq!(sites, vec!["example.com", "example.org"]);

        let file = settings_file(r#"{ "SITES": ["example.net"] }"#);
        assert_eq!(load_sites(file.path()).expect("valid settings"), vec!["example.net"]);
    }

    #[test]
    fn test_load_sites_trims_entries() {
        let file = settings_file(r#"{ "sites": ["  example.com ", "example.org:8080"] }"#);
        let sites = load_sites(file.path()).expect("valid settings");
        assert_eq!(sites, vec!["example.com", "example.org:8080"]);
    }

    #[test]
    fn test_load_sites_rejects_scheme() {
        let file = settings_file(r#"{ "sites": ["example.com", "https://example.org"] }"#);
        let err = load_sites(file.path()).expect_err("scheme not allowed");
        match err {
            SettingsError::InvalidSite { index, site, .. } => {
                assert_eq!(index, 1);
                assert_eq!(site, "https://example.org");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_sites_rejects_blank_and_path() {
        let file = settings_file(r#"{ "sites": ["   "] }"#);
        assert!(matches!(
            load_sites(file.path()),
            Err(SettingsError::InvalidSite { index: 0, .. })
        ));

        let file = settings_file(r#"{ "sites": ["example.com/login"] }"#);
        assert!(matches!(
            load_sites(file.path()),
            Err(SettingsError::InvalidSite { index: 0, .. })
        ));
    }

    #[test]
    fn test_load_sites_malformed_json() {
        let file = settings_file(r#"{ "sites": ["example.com", }"#);
        assert!(matches!(
            load_sites(file.path()),
            Err(SettingsError::Parse { .. })
        ));

        let file = settings_file(r#"{ "sites": "example.com" }"#);
        assert!(matches!(
            load_sites(file.path()),
            Err(SettingsError::Parse { .. })
        ));

        let file = settings_file(r#"["example.com"]"#);
        assert!(matches!(
            load_sites(file.path()),
            Err(SettingsError::Parse { .. })
        ));
    }
}

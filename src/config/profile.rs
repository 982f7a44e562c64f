use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Branch-office defaults for CLI arguments, loaded from a small TOML file.
///
/// Every key is optional; explicit command-line flags always win over
/// profile values. Profile problems are application errors, not part of the
/// service's validation contract.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BranchProfile {
    pub sender: Option<String>,
    pub location: Option<String>,
    pub observation: Option<String>,
}

impl BranchProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile {}", path.as_ref().display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse profile {}", path.as_ref().display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let profile = toml::from_str(content)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_a_full_profile() {
        let profile = BranchProfile::from_toml_str(
            r#"
            sender = "Sucursal Miraflores"
            location = "Av. Larco 345"
            observation = "branch drop-off"
            "#,
        )
        .unwrap();

        assert_eq!(profile.sender.as_deref(), Some("Sucursal Miraflores"));
        assert_eq!(profile.location.as_deref(), Some("Av. Larco 345"));
        assert_eq!(profile.observation.as_deref(), Some("branch drop-off"));
    }

    #[test]
    fn test_tolerates_omitted_keys() {
        let profile = BranchProfile::from_toml_str("location = \"Av. Larco 345\"").unwrap();
        assert_eq!(profile.sender, None);
        assert_eq!(profile.location.as_deref(), Some("Av. Larco 345"));
        assert_eq!(profile.observation, None);

        let empty = BranchProfile::from_toml_str("").unwrap();
        assert_eq!(empty.sender, None);
    }

    #[test]
    fn test_loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sender = \"Sucursal Centro\"").unwrap();

        let profile = BranchProfile::from_file(file.path()).unwrap();
        assert_eq!(profile.sender.as_deref(), Some("Sucursal Centro"));
    }

    #[test]
    fn test_missing_file_fails_with_the_path_in_the_context() {
        let err = BranchProfile::from_file("/no/such/profile.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("/no/such/profile.toml"));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(BranchProfile::from_toml_str("sender = [not toml").is_err());
    }
}

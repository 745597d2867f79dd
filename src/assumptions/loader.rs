//! Read projection assumptions from the environment or a JSON file

use super::ProjectionAssumptions;
use crate::error::ConfigError;
use log::info;
use std::fs;
use std::path::Path;

/// Overrides the retirement age (whole years)
pub const RETIREMENT_AGE_VAR: &str = "RETIREMENT_AGE";

/// Overrides the annual return rate (fraction, e.g. 0.05)
pub const ANNUAL_RETURN_RATE_VAR: &str = "ANNUAL_RETURN_RATE";

impl ProjectionAssumptions {
    /// Defaults with any `RETIREMENT_AGE` / `ANNUAL_RETURN_RATE` overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Load from a JSON file; missing keys fall back to defaults
    pub fn from_json_path(path: &Path) -> Result<Self, ConfigError> {
        let assumptions = read_json(path)?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// File (or defaults when `path` is `None`), then environment overrides
    pub fn from_sources(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layered(path, |name| std::env::var(name).ok())
    }

    /// Same layering as [`from_sources`](Self::from_sources) with an explicit lookup
    pub fn load_layered<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match path {
            Some(path) => read_json(path)?,
            None => Self::default(),
        };
        base.with_overrides(lookup)
    }

    /// Apply overrides from a variable lookup on top of `self`
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(RETIREMENT_AGE_VAR) {
            let age = raw.trim().parse::<u8>().map_err(|_| ConfigError::BadEnvValue {
                name: RETIREMENT_AGE_VAR,
                value: raw.clone(),
            })?;
            self.retirement_age = Some(age);
        }
        if let Some(raw) = lookup(ANNUAL_RETURN_RATE_VAR) {
            self.annual_return_rate = raw.trim().parse::<f64>().map_err(|_| ConfigError::BadEnvValue {
                name: ANNUAL_RETURN_RATE_VAR,
                value: raw.clone(),
            })?;
        }
        self.validate()?;
        Ok(self)
    }
}

fn read_json(path: &Path) -> Result<ProjectionAssumptions, ConfigError> {
    let text = fs::read_to_string(path)?;
    let assumptions = serde_json::from_str(&text)?;
    info!("loaded assumptions from {}", path.display());
    Ok(assumptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_no_overrides() {
        let a = ProjectionAssumptions::default().with_overrides(lookup(&[])).unwrap();
        assert_eq!(a, ProjectionAssumptions::default());
    }

    #[test]
    fn test_overrides_applied() {
        let a = ProjectionAssumptions::default()
            .with_overrides(lookup(&[("RETIREMENT_AGE", "67"), ("ANNUAL_RETURN_RATE", " 0.06 ")]))
            .unwrap();
        assert_eq!(a.retirement_age, Some(67));
        assert_eq!(a.annual_return_rate, 0.06);
    }

    #[test]
    fn test_bad_override_rejected() {
        let err = ProjectionAssumptions::default()
            .with_overrides(lookup(&[("RETIREMENT_AGE", "sixty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::BadEnvValue { name: "RETIREMENT_AGE", .. }));

        let err = ProjectionAssumptions::default()
            .with_overrides(lookup(&[("ANNUAL_RETURN_RATE", "5")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_json_path() {
        let path = std::env::temp_dir().join(format!("planner_assumptions_{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"retirement_age":62,"annual_return_rate":0.04}}"#).unwrap();
        drop(file);

        let a = ProjectionAssumptions::from_json_path(&path).unwrap();
        assert_eq!(a, ProjectionAssumptions::new(62, 0.04));

        fs::remove_file(&path).unwrap();
        assert!(matches!(
            ProjectionAssumptions::from_json_path(&path),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_env_overrides_apply_on_top_of_file() {
        let path = std::env::temp_dir().join(format!("planner_layered_{}.json", std::process::id()));
        fs::write(&path, r#"{"retirement_age":62,"annual_return_rate":0.04}"#).unwrap();

        let a = ProjectionAssumptions::load_layered(Some(&path), lookup(&[("ANNUAL_RETURN_RATE", "0.06")]))
            .unwrap();
        assert_eq!(a, ProjectionAssumptions::new(62, 0.06));

        let a = ProjectionAssumptions::load_layered(Some(&path), lookup(&[("RETIREMENT_AGE", "70")])).unwrap();
        assert_eq!(a, ProjectionAssumptions::new(70, 0.04));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_layered_without_file_uses_defaults() {
        let a = ProjectionAssumptions::load_layered(None, lookup(&[("RETIREMENT_AGE", "67")])).unwrap();
        assert_eq!(a, ProjectionAssumptions::new(67, 0.05));
    }
}

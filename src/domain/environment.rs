//! Deployment environments for scoped lookups

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The deployment environment whose section scoped lookups read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
    Custom(String),
}

impl Environment {
    /// Name of the top-level section holding this environment's keys.
    pub fn section(&self) -> &str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
            Environment::Custom(name) => name,
        }
    }

    /// Read the environment from a process variable, defaulting to development.
    ///
    /// Only reads; the process environment is never written.
    pub fn from_var(var: &str) -> Self {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => value.parse().unwrap_or_default(),
            _ => Environment::default(),
        }
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "dev" | "development" => Environment::Development,
            "staging" => Environment::Staging,
            "prod" | "production" => Environment::Production,
            _ => Environment::Custom(trimmed.to_string()),
        })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("staging".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!(
            " qa ".parse::<Environment>().unwrap(),
            Environment::Custom("qa".to_string())
        );
    }

    #[test]
    fn section_names_match_display() {
        assert_eq!(Environment::Production.section(), "production");
        assert_eq!(Environment::Custom("qa".into()).to_string(), "qa");
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn unset_variable_defaults_to_development() {
        let env = Environment::from_var("CONF_RESOLVE_TEST_UNSET_VARIABLE_7f3a");
        assert_eq!(env, Environment::Development);
    }
}

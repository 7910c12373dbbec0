//! Credential hashing configuration.
//!
//! # Environment Variables
//!
//! - `PASSWORD_PEPPER`: Secret mixed into every password before hashing, at
//!   most 32 bytes. Used exactly as given, surrounding whitespace included.
//!   Required when `APP_ENV=production`; elsewhere a fixed development
//!   fallback is used and a warning is logged.
//! - `PASSWORD_HASH_COST`: bcrypt work factor, 4-31 (default: 12)
//!
//! Rotating the pepper invalidates every stored password hash. There is no
//! migration path short of re-hashing each secret on its next login with the
//! old pepper still available.

use std::fmt;

use playdeck_core::password::{DEFAULT_COST, MAX_COST, MAX_PEPPER_LENGTH, MIN_COST};

use crate::{ConfigError, Environment, read_var};

/// Pepper used when `PASSWORD_PEPPER` is unset outside production.
///
/// This value is public. Never rely on it in a deployed environment.
pub const FALLBACK_PEPPER: &str = "playdeck-development-pepper";


#[derive(Clone, PartialEq, Eq)]
pub struct HasherConfig {
    pub pepper: String,
    pub cost: u32,
    /// `true` when [`FALLBACK_PEPPER`] was substituted for a missing value.
    pub using_fallback_pepper: bool,
}

impl fmt::Debug for HasherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HasherConfig")
            .field("pepper", &"[redacted]")
            .field("cost", &self.cost)
            .field("using_fallback_pepper", &self.using_fallback_pepper)
            .finish()
    }
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            pepper: FALLBACK_PEPPER.to_string(),
            cost: DEFAULT_COST,
            using_fallback_pepper: true,
        }
    }
}

impl HasherConfig {
    /// Loads the hasher configuration from the process environment.
    pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        Self::from_lookup(environment, |key| std::env::var(key).ok())
    }

    /// Loads the hasher configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingPepper`] in production when no pepper is set
    /// - [`ConfigError::PepperTooLong`] when the pepper exceeds 32 bytes
    /// - [`ConfigError::Invalid`] when the cost is not an integer in 4-31
    pub fn from_lookup<F>(environment: Environment, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pepper = lookup("PASSWORD_PEPPER").filter(|p| !p.trim().is_empty());

        let (pepper, using_fallback_pepper) = match pepper {
            Some(pepper) if pepper.len() > MAX_PEPPER_LENGTH => {
                return Err(ConfigError::PepperTooLong {
                    length: pepper.len(),
                });
            }
            Some(pepper) => (pepper, false),
            None if environment.is_production() => return Err(ConfigError::MissingPepper),
            None => {
                tracing::warn!(
                    "PASSWORD_PEPPER is not set; using the development fallback pepper"
                );
                (FALLBACK_PEPPER.to_string(), true)
            }
        };

        let cost = match read_var(&lookup, "PASSWORD_HASH_COST") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|cost| (MIN_COST..=MAX_COST).contains(cost))
                .ok_or(ConfigError::Invalid {
                    key: "PASSWORD_HASH_COST",
                    value: raw,
                })?,
            None => DEFAULT_COST,
        };

        Ok(Self {
            pepper,
            cost,
            using_fallback_pepper,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_in_development() {
        let config = HasherConfig::from_lookup(Environment::Development, lookup(&[])).unwrap();
        assert_eq!(config.pepper, FALLBACK_PEPPER);
        assert_eq!(config.cost, 12);
        assert!(config.using_fallback_pepper);
    }

    #[test]
    fn test_production_requires_pepper() {
        let result = HasherConfig::from_lookup(Environment::Production, lookup(&[]));
        assert_eq!(result, Err(ConfigError::MissingPepper));
    }

    #[test]
    fn test_blank_pepper_counts_as_missing() {
        let result =
            HasherConfig::from_lookup(Environment::Production, lookup(&[("PASSWORD_PEPPER", "  ")]));
        assert_eq!(result, Err(ConfigError::MissingPepper));
    }

    #[test]
    fn test_production_with_pepper() {
        let config = HasherConfig::from_lookup(
            Environment::Production,
            lookup(&[("PASSWORD_PEPPER", "s3cret"), ("PASSWORD_HASH_COST", "13")]),
        )
        .unwrap();
        assert_eq!(config.pepper, "s3cret");
        assert_eq!(config.cost, 13);
        assert!(!config.using_fallback_pepper);
    }

    #[test]
    fn test_pepper_whitespace_is_preserved() {
        let config = HasherConfig::from_lookup(
            Environment::Production,
            lookup(&[("PASSWORD_PEPPER", " s3cret\t")]),
        )
        .unwrap();
        assert_eq!(config.pepper, " s3cret\t");
    }

    #[test]
    fn test_long_pepper_rejected() {
        let pepper = "p".repeat(MAX_PEPPER_LENGTH + 1);
        let result = HasherConfig::from_lookup(
            Environment::Development,
            lookup(&[("PASSWORD_PEPPER", pepper.as_str())]),
        );
        assert_eq!(result, Err(ConfigError::PepperTooLong { length: 33 }));
    }

    #[test]
    fn test_fallback_pepper_fits_hasher() {
        assert!(FALLBACK_PEPPER.len() <= MAX_PEPPER_LENGTH);
    }

    #[test]
    fn test_invalid_cost() {
        for raw in ["3", "32", "twelve"] {
            let result = HasherConfig::from_lookup(
                Environment::Development,
                lookup(&[("PASSWORD_HASH_COST", raw)]),
            );
            assert_eq!(
                result,
                Err(ConfigError::Invalid {
                    key: "PASSWORD_HASH_COST",
                    value: raw.to_string()
                })
            );
        }
    }

    #[test]
    fn test_debug_redacts_pepper() {
        let config = HasherConfig {
            pepper: "very-secret".to_string(),
            cost: 12,
            using_fallback_pepper: false,
        };
        assert!(!format!("{:?}", config).contains("very-secret"));
    }
}

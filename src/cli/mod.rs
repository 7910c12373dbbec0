//! Support code for the `playdeck-cli` binary.
//!
//! The binary only parses arguments and prompts; the work happens here so it
//! can be tested without a terminal.

use std::fmt;

use anyhow::Context;

use playdeck_config::{Environment, HasherConfig};
use playdeck_core::password::{
    CredentialHasher, MAX_PASSWORD_LENGTH, PasswordError, generate_temporary_password,
};

/// Builds a hasher from `APP_ENV`, `PASSWORD_PEPPER`, and `PASSWORD_HASH_COST`.
pub fn load_hasher() -> anyhow::Result<CredentialHasher> {
    let environment = Environment::from_env().context("Failed to read APP_ENV")?;
    let config = HasherConfig::from_env(environment).context("Invalid hasher configuration")?;

    if config.using_fallback_pepper {
        eprintln!("⚠️  PASSWORD_PEPPER is not set; hashes use the development fallback pepper");
    }

    Ok(CredentialHasher::new(config.pepper, config.cost)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    pub valid: bool,
    pub needs_rehash: bool,
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.valid, self.needs_rehash) {
            (false, _) => write!(f, "❌ Password does not match"),
            (true, false) => write!(f, "✅ Password matches"),
            (true, true) => write!(
                f,
                "✅ Password matches (hash uses an outdated cost and should be regenerated)"
            ),
        }
    }
}

pub fn verify(
    hasher: &CredentialHasher,
    password: &str,
    hash: &str,
) -> Result<VerifyReport, PasswordError> {
    Ok(VerifyReport {
        valid: hasher.verify_blocking(password, hash)?,
        needs_rehash: hasher.needs_rehash(hash)?,
    })
}

/// A temporary password together with the hash to store for it.
#[derive(Debug, Clone)]
pub struct TemporaryCredential {
    pub password: String,
    pub hash: String,
}

/// Parses `--length` for `temp-password`; accepts 1 to [`MAX_PASSWORD_LENGTH`].
pub fn parse_temporary_length(raw: &str) -> Result<usize, String> {
    let length: usize = raw
        .parse()
        .map_err(|_| format!("`{}` is not a valid length", raw))?;

    if !(1..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(format!(
            "length must be between 1 and {}",
            MAX_PASSWORD_LENGTH
        ));
    }

    Ok(length)
}

pub fn issue_temporary(
    hasher: &CredentialHasher,
    length: usize,
) -> anyhow::Result<TemporaryCredential> {
    anyhow::ensure!(
        (1..=MAX_PASSWORD_LENGTH).contains(&length),
        "length must be between 1 and {}",
        MAX_PASSWORD_LENGTH
    );

    let password = generate_temporary_password(length);
    let hash = hasher.hash_blocking(&password)?;

    Ok(TemporaryCredential { password, hash })
}

#[cfg(test)]
mod tests {
    use super::*;
    use playdeck_core::password::MIN_COST;

    fn hasher() -> CredentialHasher {
        CredentialHasher::new("cli-test-pepper", MIN_COST).unwrap()
    }

    #[test]
    fn test_verify_report() {
        let hasher = hasher();
        let hash = hasher.hash_blocking("hunter22").unwrap();

        let report = verify(&hasher, "hunter22", &hash).unwrap();
        assert_eq!(
            report,
            VerifyReport {
                valid: true,
                needs_rehash: false
            }
        );
        assert!(!verify(&hasher, "hunter23", &hash).unwrap().valid);
    }

    #[test]
    fn test_report_display() {
        let report = VerifyReport {
            valid: true,
            needs_rehash: true,
        };
        assert!(report.to_string().contains("outdated cost"));
        let mismatch = VerifyReport {
            valid: false,
            needs_rehash: true,
        };
        assert!(mismatch.to_string().contains("does not match"));
    }

    #[test]
    fn test_issue_temporary() {
        let hasher = hasher();
        let credential = issue_temporary(&hasher, 20).unwrap();
        assert_eq!(credential.password.len(), 20);
        assert!(hasher
            .verify_blocking(&credential.password, &credential.hash)
            .unwrap());
    }

    #[test]
    fn test_issue_temporary_rejects_out_of_range_length() {
        let hasher = hasher();
        assert!(issue_temporary(&hasher, 0).is_err());
        assert!(issue_temporary(&hasher, MAX_PASSWORD_LENGTH + 1).is_err());
        assert!(issue_temporary(&hasher, MAX_PASSWORD_LENGTH).is_ok());
    }

    #[test]
    fn test_parse_temporary_length() {
        assert_eq!(parse_temporary_length("12"), Ok(12));
        assert_eq!(parse_temporary_length("39"), Ok(39));
        assert!(parse_temporary_length("0").is_err());
        assert!(parse_temporary_length("40").is_err());
        assert!(parse_temporary_length("-1").is_err());
        assert!(parse_temporary_length("ten").is_err());
    }
}

//! Peppered bcrypt credential hashing.
//!
//! Every secret is combined with a process-wide pepper before it reaches
//! bcrypt, so a leaked representation alone is not enough to mount an
//! offline guessing attack. The pepper is never stored next to the
//! representation.
//!
//! # Representation
//!
//! Representations are standard bcrypt strings (`$2b$<cost>$<salt><hash>`).
//! The salt and cost are embedded, which lets [`CredentialHasher::needs_rehash`]
//! detect representations produced under an older, cheaper cost.
//!
//! # Length limits
//!
//! bcrypt ignores everything past its first 72 input bytes. The pepper is
//! appended after the secret, so unchecked long secrets would silently lose
//! the pepper and collide with each other. Peppers are therefore capped at
//! [`MAX_PEPPER_LENGTH`] bytes and secrets at [`MAX_PASSWORD_LENGTH`] bytes,
//! which together always fit in [`BCRYPT_INPUT_LIMIT`].
//!
//! # Example
//!
//! ```ignore
//! use playdeck_core::password::{CredentialHasher, generate_temporary_password};
//!
//! let hasher = CredentialHasher::new("pepper-from-config", 12)?;
//!
//! let stored = hasher.hash("Str0ngP@ss!").await?;
//! assert!(hasher.verify("Str0ngP@ss!", &stored).await?);
//!
//! if hasher.needs_rehash(&stored)? {
//!     // re-hash on the next successful login
//! }
//!
//! let temporary = generate_temporary_password(12);
//! ```

use std::fmt;
use std::sync::Arc;

use bcrypt::HashParts;
use rand::Rng;

/// Cost used when nothing else is configured.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Smallest cost bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Largest cost bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Joins the plaintext and the pepper before hashing.
pub const PEPPER_SEPARATOR: &str = ":";

/// Number of input bytes bcrypt actually hashes.
pub const BCRYPT_INPUT_LIMIT: usize = 72;

/// Longest pepper, in bytes, a hasher accepts.
pub const MAX_PEPPER_LENGTH: usize = 32;

/// Longest secret, in bytes, that can be hashed or verified.
pub const MAX_PASSWORD_LENGTH: usize =
    BCRYPT_INPUT_LIMIT - PEPPER_SEPARATOR.len() - MAX_PEPPER_LENGTH;

/// Characters used for temporary passwords.
///
/// Letters and digits minus the visually ambiguous `I`, `l`, `O`, `0` and `1`.
pub const TEMPORARY_PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789";

/// Default length of a temporary password.
pub const DEFAULT_TEMPORARY_PASSWORD_LENGTH: usize = 12;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("bcrypt cost {0} is outside the allowed range 4..=31")]
    InvalidCost(u32),

    #[error("pepper is {0} bytes; at most 32 are allowed")]
    PepperTooLong(usize),

    #[error("password is {0} bytes; at most 39 are allowed")]
    PasswordTooLong(usize),

    #[error("Failed to hash password: {0}")]
    Hashing(#[source] bcrypt::BcryptError),

    #[error("Malformed password hash: {0}")]
    MalformedHash(#[source] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hashes and verifies secrets with a fixed pepper and bcrypt cost.
///
/// Cloning is cheap; the pepper is shared behind an `Arc`.
#[derive(Clone)]
pub struct CredentialHasher {
    pepper: Arc<str>,
    cost: u32,
}

impl fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("pepper", &"[redacted]")
            .field("cost", &self.cost)
            .finish()
    }
}

impl CredentialHasher {
    /// Creates a hasher for the given pepper and bcrypt cost.
    ///
    /// # Errors
    ///
    /// - [`PasswordError::InvalidCost`] if `cost` is outside
    ///   [`MIN_COST`]..=[`MAX_COST`]
    /// - [`PasswordError::PepperTooLong`] if the pepper is longer than
    ///   [`MAX_PEPPER_LENGTH`] bytes
    pub fn new(pepper: impl Into<String>, cost: u32) -> Result<Self, PasswordError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordError::InvalidCost(cost));
        }

        let pepper = pepper.into();
        if pepper.len() > MAX_PEPPER_LENGTH {
            return Err(PasswordError::PepperTooLong(pepper.len()));
        }

        Ok(Self {
            pepper: Arc::from(pepper),
            cost,
        })
    }

    /// The configured work factor.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    fn peppered(&self, plaintext: &str) -> Result<String, PasswordError> {
        if plaintext.len() > MAX_PASSWORD_LENGTH {
            return Err(PasswordError::PasswordTooLong(plaintext.len()));
        }

        let mut input =
            String::with_capacity(plaintext.len() + PEPPER_SEPARATOR.len() + self.pepper.len());
        input.push_str(plaintext);
        input.push_str(PEPPER_SEPARATOR);
        input.push_str(&self.pepper);
        Ok(input)
    }

    /// Hashes `plaintext` on the current thread.
    ///
    /// This blocks for as long as bcrypt takes at the configured cost. Request
    /// handlers should call [`CredentialHasher::hash`] instead.
    ///
    /// Fails with [`PasswordError::PasswordTooLong`] for secrets longer than
    /// [`MAX_PASSWORD_LENGTH`] bytes.
    pub fn hash_blocking(&self, plaintext: &str) -> Result<String, PasswordError> {
        bcrypt::hash(self.peppered(plaintext)?, self.cost).map_err(PasswordError::Hashing)
    }

    /// Checks `plaintext` against a stored representation on the current thread.
    ///
    /// A mismatch is `Ok(false)`. A malformed representation or a secret
    /// longer than [`MAX_PASSWORD_LENGTH`] bytes is an error.
    pub fn verify_blocking(
        &self,
        plaintext: &str,
        representation: &str,
    ) -> Result<bool, PasswordError> {
        bcrypt::verify(self.peppered(plaintext)?, representation)
            .map_err(PasswordError::MalformedHash)
    }

    /// Hashes `plaintext` on the blocking thread pool.
    pub async fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let hasher = self.clone();
        let plaintext = plaintext.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash_blocking(&plaintext)).await?
    }

    /// Verifies `plaintext` on the blocking thread pool.
    pub async fn verify(&self, plaintext: &str, representation: &str) -> Result<bool, PasswordError> {
        let hasher = self.clone();
        let plaintext = plaintext.to_owned();
        let representation = representation.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify_blocking(&plaintext, &representation))
            .await?
    }

    /// Returns `true` if `representation` was produced with a lower cost than
    /// the one currently configured.
    pub fn needs_rehash(&self, representation: &str) -> Result<bool, PasswordError> {
        let parts: HashParts = representation
            .parse()
            .map_err(PasswordError::MalformedHash)?;

        Ok(parts.get_cost() < self.cost)
    }
}

/// Generates a one-time password of `length` characters.
///
/// Characters are drawn uniformly from [`TEMPORARY_PASSWORD_ALPHABET`] using
/// the thread-local CSPRNG.
#[must_use]
pub fn generate_temporary_password(length: usize) -> String {
    generate_temporary_password_with(&mut rand::thread_rng(), length)
}

/// Same as [`generate_temporary_password`] with a caller-supplied random source.
pub fn generate_temporary_password_with<R>(rng: &mut R, length: usize) -> String
where
    R: Rng + ?Sized,
{
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..TEMPORARY_PASSWORD_ALPHABET.len());
            char::from(TEMPORARY_PASSWORD_ALPHABET[idx])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hasher() -> CredentialHasher {
        CredentialHasher::new("unit-test-pepper", MIN_COST).unwrap()
    }

    #[test]
    fn test_new_rejects_cost_below_minimum() {
        let result = CredentialHasher::new("pepper", 3);
        assert!(matches!(result, Err(PasswordError::InvalidCost(3))));
    }

    #[test]
    fn test_new_rejects_cost_above_maximum() {
        let result = CredentialHasher::new("pepper", 32);
        assert!(matches!(result, Err(PasswordError::InvalidCost(32))));
    }

    #[test]
    fn test_new_accepts_boundaries() {
        assert_eq!(CredentialHasher::new("pepper", MIN_COST).unwrap().cost(), MIN_COST);
        assert_eq!(CredentialHasher::new("pepper", MAX_COST).unwrap().cost(), MAX_COST);
    }

    #[test]
    fn test_debug_redacts_pepper() {
        let debug = format!("{:?}", hasher());
        assert!(!debug.contains("unit-test-pepper"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn test_peppered_input_layout() {
        assert_eq!(hasher().peppered("secret").unwrap(), "secret:unit-test-pepper");
    }

    #[test]
    fn test_longest_inputs_fit_bcrypt() {
        let hasher = CredentialHasher::new("p".repeat(MAX_PEPPER_LENGTH), MIN_COST).unwrap();
        let input = hasher.peppered(&"s".repeat(MAX_PASSWORD_LENGTH)).unwrap();
        assert_eq!(input.len(), BCRYPT_INPUT_LIMIT);
    }

    #[test]
    fn test_new_rejects_long_pepper() {
        let result = CredentialHasher::new("p".repeat(MAX_PEPPER_LENGTH + 1), MIN_COST);
        assert!(matches!(result, Err(PasswordError::PepperTooLong(33))));
    }

    #[test]
    fn test_long_password_rejected() {
        let hasher = hasher();
        let long = "x".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(matches!(
            hasher.hash_blocking(&long),
            Err(PasswordError::PasswordTooLong(40))
        ));

        let stored = hasher.hash_blocking("secret").unwrap();
        assert!(matches!(
            hasher.verify_blocking(&long, &stored),
            Err(PasswordError::PasswordTooLong(40))
        ));
    }

    #[test]
    fn test_error_messages_match_limits() {
        assert_eq!(MAX_PASSWORD_LENGTH, 39);
        assert!(PasswordError::PepperTooLong(40)
            .to_string()
            .contains(&MAX_PEPPER_LENGTH.to_string()));
        assert!(PasswordError::PasswordTooLong(40)
            .to_string()
            .contains(&MAX_PASSWORD_LENGTH.to_string()));
    }

    #[test]
    fn test_hash_embeds_configured_cost() {
        let stored = hasher().hash_blocking("secret").unwrap();
        assert!(stored.starts_with("$2b$04$"));
        assert_eq!(stored.len(), 60);
    }

    #[test]
    fn test_hash_is_not_plain_bcrypt_of_secret() {
        let stored = hasher().hash_blocking("secret").unwrap();
        assert!(!bcrypt::verify("secret", &stored).unwrap());
    }

    #[test]
    fn test_verify_blocking_round_trip() {
        let hasher = hasher();
        let stored = hasher.hash_blocking("Str0ngP@ss!").unwrap();
        assert!(hasher.verify_blocking("Str0ngP@ss!", &stored).unwrap());
        assert!(!hasher.verify_blocking("wrongpass", &stored).unwrap());
    }

    #[test]
    fn test_verify_blocking_malformed_hash() {
        let result = hasher().verify_blocking("secret", "not-a-hash");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[test]
    fn test_needs_rehash_malformed_hash() {
        let result = hasher().needs_rehash("$2b$xx$tooshort");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[test]
    fn test_temporary_password_lengths() {
        for length in [0, 1, 12, 64] {
            assert_eq!(generate_temporary_password(length).len(), length);
        }
    }

    #[test]
    fn test_temporary_password_alphabet_excludes_ambiguous() {
        for ambiguous in [b'I', b'l', b'O', b'0', b'1'] {
            assert!(!TEMPORARY_PASSWORD_ALPHABET.contains(&ambiguous));
        }
        assert_eq!(TEMPORARY_PASSWORD_ALPHABET.len(), 57);
    }

    #[test]
    fn test_temporary_password_is_deterministic_for_seeded_rng() {
        let first = generate_temporary_password_with(&mut StdRng::seed_from_u64(7), 16);
        let second = generate_temporary_password_with(&mut StdRng::seed_from_u64(7), 16);
        assert_eq!(first, second);
        assert!(first.bytes().all(|b| TEMPORARY_PASSWORD_ALPHABET.contains(&b)));
    }
}

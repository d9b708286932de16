/**
 * Password Hashing
 *
 * This module turns plaintext passwords into storable bcrypt hashes and
 * checks login attempts against them.
 *
 * # Security
 *
 * - Every hash carries its own random salt and cost
 * - Verification never reports an error: a malformed stored hash is simply
 *   a mismatch, so callers cannot build an oracle out of error paths
 * - bcrypt compares digests in constant time
 * - bcrypt only digests the first 72 bytes; longer passwords are refused
 *   rather than silently truncated
 */

use std::sync::OnceLock;

use thiserror::Error;

/// Longest password bcrypt digests in full, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hashing failed inside bcrypt (randomness, allocation, or a password
/// longer than [`MAX_PASSWORD_BYTES`])
#[derive(Debug, Error)]
#[error("failed to hash password: {0}")]
pub struct EncodingError(#[from] bcrypt::BcryptError);

/// bcrypt password codec
///
/// Holds only the work factor, so it is `Copy` and can be moved onto the
/// blocking thread pool freely.
#[derive(Debug, Clone, Copy)]
pub struct PasswordCodec {
    cost: u32,
}

impl Default for PasswordCodec {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordCodec {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password for storage
    pub fn hash(&self, plaintext: &str) -> Result<String, EncodingError> {
        Ok(bcrypt::non_truncating_hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A plaintext longer than [`MAX_PASSWORD_BYTES`] never matches.
    pub fn verify(&self, hash: &str, plaintext: &str) -> bool {
        match bcrypt::non_truncating_verify(plaintext, hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::debug!("Password could not be checked against stored hash: {}", e);
                false
            }
        }
    }

    /// Spend the same work as a real verification and report a mismatch
    ///
    /// Used when the user does not exist so that response time does not
    /// reveal which usernames are registered.
    pub fn verify_dummy(&self, plaintext: &str) -> bool {
        if let Some(hash) = self.dummy_hash() {
            let _ = bcrypt::non_truncating_verify(plaintext, hash);
        }
        false
    }

    /// Dummy hash at this codec's cost, built on first use
    ///
    /// One slot per valid bcrypt cost, so codecs with different costs each
    /// verify against a hash of their own work factor.
    fn dummy_hash(&self) -> Option<&'static str> {
        static DUMMY_HASHES: [OnceLock<Option<String>>; 32] = [const { OnceLock::new() }; 32];

        let slot = DUMMY_HASHES.get(usize::try_from(self.cost).ok()?)?;
        slot.get_or_init(|| bcrypt::hash("authgate-dummy-password", self.cost).ok())
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> PasswordCodec {
        PasswordCodec::new(4)
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = codec().hash("secret123").unwrap();
        assert_ne!(hash, "secret123");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = codec().hash("secret123").unwrap();
        let second = codec().hash("secret123").unwrap();
        assert_ne!(first, second);
        assert!(codec().verify(&first, "secret123"));
        assert!(codec().verify(&second, "secret123"));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = codec().hash("secret123").unwrap();
        assert!(!codec().verify(&hash, "secret124"));
        assert!(!codec().verify(&hash, ""));
    }

    #[test]
    fn test_verify_malformed_hash_is_mismatch() {
        assert!(!codec().verify("not-a-bcrypt-hash", "secret123"));
        assert!(!codec().verify("", "secret123"));
        assert!(!codec().verify("secret123", "secret123"));
    }

    #[test]
    fn test_verify_across_costs() {
        let hash = PasswordCodec::new(5).hash("secret123").unwrap();
        assert!(codec().verify(&hash, "secret123"));
    }

    #[test]
    fn test_verify_dummy_never_matches() {
        assert!(!codec().verify_dummy("authgate-dummy-password"));
        assert!(!codec().verify_dummy("anything"));
    }

    #[test]
    fn test_dummy_hash_matches_codec_cost() {
        let cheap = codec().dummy_hash().unwrap();
        let dearer = PasswordCodec::new(5).dummy_hash().unwrap();
        assert!(cheap.starts_with("$2b$04$"), "{cheap}");
        assert!(dearer.starts_with("$2b$05$"), "{dearer}");
        assert!(PasswordCodec::new(99).dummy_hash().is_none());
    }

    #[test]
    fn test_hash_refuses_overlong_password() {
        let long = "a".repeat(80);
        assert!(codec().hash(&long).is_err());

        let limit = "a".repeat(MAX_PASSWORD_BYTES);
        assert!(codec().hash(&limit).is_ok());
    }

    #[test]
    fn test_verify_does_not_truncate() {
        let stored = "a".repeat(MAX_PASSWORD_BYTES);
        let hash = codec().hash(&stored).unwrap();

        assert!(codec().verify(&hash, &stored));
        assert!(!codec().verify(&hash, &format!("{stored}X")));
        assert!(!codec().verify(&hash, &format!("{stored}DIFFERENT")));
    }
}

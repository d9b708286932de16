//! Property-based tests for the password codec and token service

use std::time::Duration;

use authgate::backend::auth::password::MAX_PASSWORD_BYTES;
use authgate::backend::auth::{PasswordCodec, TokenError, TokenService};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

proptest! {
    // bcrypt is deliberately slow; keep the case count small.
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_hash_then_verify(
        password in "[ -~]{1,72}",
        other in "[ -~]{1,100}",
    ) {
        let codec = PasswordCodec::new(4);
        let hash = codec.hash(&password).unwrap();

        prop_assert_ne!(&hash, &password);
        prop_assert!(codec.verify(&hash, &password));
        if other != password {
            prop_assert!(!codec.verify(&hash, &other));
        }
    }

    #[test]
    fn test_long_plaintext_sharing_prefix_never_verifies(
        password in "[ -~]{72}",
        suffix in "[ -~]{1,28}",
    ) {
        let codec = PasswordCodec::new(4);
        let hash = codec.hash(&password).unwrap();
        let extended = format!("{password}{suffix}");

        prop_assert!(extended.len() > MAX_PASSWORD_BYTES);
        prop_assert!(codec.hash(&extended).is_err());
        prop_assert!(!codec.verify(&hash, &extended));
    }
}

proptest! {
    #[test]
    fn test_issue_then_validate(
        subject in "[a-zA-Z0-9_]{1,32}",
        ttl in 1u64..1_000_000,
        now in 1_000_000_000i64..2_000_000_000,
    ) {
        let tokens = TokenService::new(b"property-test-secret");
        let issued_at = Utc.timestamp_opt(now, 0).unwrap();
        let issued = tokens.issue_at(&subject, Duration::from_secs(ttl), issued_at).unwrap();

        let claims = tokens.validate_at(&issued.token, issued_at).unwrap();
        prop_assert_eq!(claims.subject(), subject.as_str());
        prop_assert_eq!(claims.expires_at(), now + ttl as i64);

        let after_expiry = Utc.timestamp_opt(now + ttl as i64 + 1, 0).unwrap();
        prop_assert_eq!(tokens.validate_at(&issued.token, after_expiry), Err(TokenError::Expired));
    }
}

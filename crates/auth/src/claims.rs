//! Bearer token claims extraction.
//!
//! Tokens are three dot-separated segments; the middle one is URL-safe base64
//! JSON. Only the claims are read here. The signature is never checked and the
//! result must not be treated as proof of identity: the backend stays the
//! authority and answers `401` for tokens it no longer accepts.

use base64::Engine;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Standard alphabet, canonical padding required, non-zero trailing bits
/// tolerated (browsers' `atob` accepts them too).
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Claims the storefront reads from a session token.
///
/// Every field is optional; unknown claims are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Raw role claim, kept verbatim so unrecognised values stay visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,

    /// Expiry in seconds since the epoch. Decoded, never enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<serde_json::Number>,
}

impl TokenClaims {
    /// The role claim, if it names a known role.
    pub fn role(&self) -> Option<Role> {
        self.user_role.as_deref().and_then(Role::parse)
    }

    /// `exp` as a timestamp, for display.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.exp.as_ref()?;
        let secs = match exp.as_i64() {
            Some(secs) => secs,
            None => exp.as_f64()?.trunc() as i64,
        };
        DateTime::from_timestamp(secs, 0)
    }
}

/// Rewrite URL-safe base64 into the standard alphabet and pad it.
///
/// A length of `4n + 1` gets three `=`; no decoder accepts that, so such
/// segments fail to decode.
pub fn normalize_base64(input: &str) -> String {
    let normalized: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    match normalized.len() % 4 {
        2 => normalized + "==",
        3 => normalized + "=",
        1 => normalized + "===",
        _ => normalized,
    }
}

/// Decode the claims segment of `token`.
///
/// Returns `None` when the token has fewer than two segments, when the
/// payload is not valid base64, or when it is not a JSON object. Claims of
/// an unexpected type are left out individually.
pub fn decode_token(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;

    let bytes = match PAYLOAD_ENGINE.decode(normalize_base64(payload)) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(error = %err, "token payload is not valid base64");
            return None;
        }
    };

    let payload = match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(_) => {
            tracing::debug!("token payload is not a JSON object");
            return None;
        }
        Err(err) => {
            tracing::debug!(error = %err, "token payload is not valid JSON");
            return None;
        }
    };

    // Claims are read one by one; a claim of an unexpected type is dropped
    // without discarding the others.
    Some(TokenClaims {
        user_id: text_claim(payload.get("user_id")),
        email: text_claim(payload.get("email")),
        user_role: payload.get("user_role").and_then(|v| v.as_str()).map(str::to_string),
        exp: match payload.get("exp") {
            Some(serde_json::Value::Number(n)) => Some(n.clone()),
            _ => None,
        },
    })
}

/// String claims pass through; numeric ones are rendered as text.
fn text_claim(value: Option<&serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use proptest::prelude::*;

    pub(crate) const ADMIN_TOKEN: &str = "header.eyJ1c2VyX2lkIjoidTEiLCJlbWFpbCI6ImFAYi5jb20iLCJ1c2VyX3JvbGUiOiJBRE1JTiJ9.sig";
    pub(crate) const USER_TOKEN: &str = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJ1c2VyX2lkIjoidTIiLCJlbWFpbCI6InVAYi5jb20iLCJ1c2VyX3JvbGUiOiJVU0VSIn0.signature";
    pub(crate) const INVALID_ROLE_TOKEN: &str =
        "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJ1c2VyX3JvbGUiOiJJTlZBTElEIn0.signature";

    /// Build an unsigned token around an arbitrary JSON payload.
    pub(crate) fn token_with(payload: &serde_json::Value) -> String {
        let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
        format!("eyJhbGciOiJub25lIn0.{body}.sig")
    }

    #[test]
    fn decodes_example_vector() {
        let claims = decode_token(ADMIN_TOKEN).unwrap();
        assert_eq!(
            claims,
            TokenClaims {
                user_id: Some("u1".into()),
                email: Some("a@b.com".into()),
                user_role: Some("ADMIN".into()),
                exp: None,
            }
        );
        assert_eq!(claims.role(), Some(Role::Admin));
    }

    #[test]
    fn single_segment_is_malformed() {
        assert_eq!(decode_token("not-a-token"), None);
        assert_eq!(decode_token(""), None);
    }

    #[test]
    fn two_segments_are_enough() {
        let claims = decode_token("h.eyJ1c2VyX2lkIjoidTIifQ").unwrap();
        assert_eq!(claims.user_id.as_deref(), Some("u2"));
    }

    #[test]
    fn garbage_payloads_yield_none() {
        assert_eq!(decode_token("a.!!!!.c"), None);
        assert_eq!(decode_token("a.bm90IGpzb24.c"), None); // "not json"
        assert_eq!(decode_token("a.WzEsMiwzXQ.c"), None); // "[1,2,3]"
        assert_eq!(decode_token("a..c"), None);
    }

    #[test]
    fn remainder_one_padding_fails_to_decode() {
        assert_eq!(normalize_base64("abcde"), "abcde===");
        assert_eq!(decode_token("a.eyJ1c.c"), None);
    }

    #[test]
    fn normalizes_url_safe_alphabet() {
        assert_eq!(normalize_base64("ab-_"), "ab+/");
        assert_eq!(normalize_base64("ab"), "ab==");
        assert_eq!(normalize_base64("abc"), "abc=");

        // these payloads contain '-' and '_' respectively in url-safe form
        let claims = decode_token("h.eyJlbWFpbCI6IsO8Pz4-QGIuY29tIiwidXNlcl9yb2xlIjoiVVNFUiJ9.s").unwrap();
        assert_eq!(claims.email.as_deref(), Some("ü?>>@b.com"));
        let claims = decode_token("h.eyJlbWFpbCI6Ij8_P0BiLmNvbSJ9.s").unwrap();
        assert_eq!(claims.email.as_deref(), Some("???@b.com"));
    }

    #[test]
    fn unknown_role_is_kept_raw_but_not_recognised() {
        let claims = decode_token(INVALID_ROLE_TOKEN).unwrap();
        assert_eq!(claims.user_role.as_deref(), Some("INVALID"));
        assert_eq!(claims.role(), None);
    }

    #[test]
    fn exp_is_exposed_as_timestamp() {
        let token = token_with(&serde_json::json!({ "user_role": "ADMIN", "exp": 1_700_000_000 }));
        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.expires_at().unwrap().timestamp(), 1_700_000_000);

        let token = token_with(&serde_json::json!({ "exp": 1_700_000_000.75 }));
        assert_eq!(
            decode_token(&token).unwrap().expires_at().unwrap().timestamp(),
            1_700_000_000
        );
    }

    #[test]
    fn extra_claims_are_ignored_and_nulls_are_absent() {
        let token = token_with(&serde_json::json!({
            "user_id": "u9",
            "email": null,
            "iat": 1,
            "scope": ["a"]
        }));
        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.user_id.as_deref(), Some("u9"));
        assert_eq!(claims.email, None);
    }

    #[test]
    fn non_utf8_payload_yields_none() {
        let body = URL_SAFE_NO_PAD.encode(b"{\"email\":\"\xff\"}");
        assert_eq!(decode_token(&format!("h.{body}.s")), None);
    }

    #[test]
    fn numeric_user_id_keeps_the_role() {
        let token = token_with(&serde_json::json!({
            "user_id": 42,
            "email": "a@b.com",
            "user_role": "ADMIN"
        }));
        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.user_id.as_deref(), Some("42"));
        assert_eq!(claims.role(), Some(Role::Admin));
    }

    #[test]
    fn mistyped_claims_are_dropped_individually() {
        let token = token_with(&serde_json::json!({ "user_role": "USER", "exp": "1700000000" }));
        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.role(), Some(Role::User));
        assert_eq!(claims.exp, None);
        assert_eq!(claims.expires_at(), None);

        let token = token_with(&serde_json::json!({ "user_role": 1, "email": { "x": 1 }, "user_id": true }));
        assert_eq!(decode_token(&token), Some(TokenClaims::default()));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Decoding never panics, whatever the input.
        #[test]
        fn decode_is_total(input in ".*") {
            let _ = decode_token(&input);
        }

        /// Claims survive encoding into a token and back.
        #[test]
        fn encoded_claims_decode_exactly(
            user_id in proptest::option::of("[a-z0-9-]{1,12}"),
            email in proptest::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com"),
            role in proptest::option::of(prop_oneof![Just("USER"), Just("ADMIN"), Just("GUEST")]),
        ) {
            let claims = TokenClaims {
                user_id,
                email,
                user_role: role.map(str::to_string),
                exp: None,
            };
            let token = token_with(&serde_json::to_value(&claims).unwrap());
            prop_assert_eq!(decode_token(&token), Some(claims));
        }
    }
}

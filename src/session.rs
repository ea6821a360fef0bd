use std::{
    fs, io,
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Well-known file name holding the decoded claims of the signed-in user.
pub const SESSION_FILE: &str = "userData.json";

/// Decoded payload of a backend-issued sign-in token.
///
/// Used only to prefill names and gate commands on this side; the backend
/// re-checks every privileged call.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Decode the payload segment of a signed token into [`Claims`].
///
/// The token must have three dot-separated segments; the middle one is
/// base64url JSON. The signature is not verified here.
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => {
            return Err(ClientError::MalformedToken(
                "expected three dot-separated segments".to_string(),
            ))
        }
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|err| ClientError::MalformedToken(format!("payload is not base64url: {err}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|err| ClientError::MalformedToken(format!("payload is not claims JSON: {err}")))
}

/// Holds the current session and mirrors it into [`SESSION_FILE`] so that
/// separate invocations see the same signed-in user.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    claims: Option<Claims>,
}

impl SessionStore {
    /// Load the session persisted under `dir`, if any. An unreadable file is
    /// treated as no session.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(SESSION_FILE);
        let claims = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(claims) => Some(claims),
                Err(err) => {
                    warn!("Ignoring unreadable session file {}: {err}", path.display());
                    None
                }
            },
            Err(_) => None,
        };
        Self { path, claims }
    }

    /// Decode `token` and replace the stored session with its claims.
    ///
    /// A failed decode leaves any existing session untouched.
    pub fn establish(&mut self, token: &str) -> Result<&Claims> {
        let claims = decode_claims(token)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(&claims).map_err(io::Error::other)?;
        fs::write(&self.path, json)?;
        debug!("Session stored at {}", self.path.display());

        Ok(self.claims.insert(claims))
    }

    /// The stored claims, or `None` when nobody is signed in. Never fails.
    pub fn current_user(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// True only when a session exists and carries the administrator flag.
    pub fn is_administrator(&self) -> bool {
        self.claims.as_ref().is_some_and(|claims| claims.is_admin)
    }

    /// Drop the session and its file. Clearing an empty session is a no-op.
    pub fn clear(&mut self) -> Result<()> {
        self.claims = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Claims of the signed-in user, or a validation error for gated commands.
    pub fn require_user(&self) -> Result<&Claims> {
        self.current_user().ok_or_else(|| {
            ClientError::Validation("you must be signed in (run `donate-cli login`)".to_string())
        })
    }

    /// Like [`require_user`](Self::require_user), but also checks the
    /// administrator flag.
    pub fn require_admin(&self) -> Result<&Claims> {
        let claims = self.require_user()?;
        if claims.is_admin {
            Ok(claims)
        } else {
            Err(ClientError::Validation(
                "this command is restricted to administrators".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_decode_claims() {
        let token = token_with_payload(r#"{"name":"Ada","email":"a@x.com","isAdmin":true}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.name, "Ada");
        assert_eq!(claims.email, "a@x.com");
        assert!(claims.is_admin);
    }

    #[test]
    fn test_decode_claims_missing_admin_flag() {
        let token = token_with_payload(r#"{"name":"Ada","email":"a@x.com"}"#);
        let claims = decode_claims(&token).unwrap();
        assert!(!claims.is_admin);
    }

    #[test]
    fn test_decode_claims_rejects_wrong_segment_count() {
        assert!(matches!(
            decode_claims("only-one-segment"),
            Err(ClientError::MalformedToken(_))
        ));
        assert!(matches!(
            decode_claims("a.b.c.d"),
            Err(ClientError::MalformedToken(_))
        ));
    }

    #[test]
    fn test_decode_claims_rejects_bad_base64() {
        let err = decode_claims("header.!!not-base64url!!.signature").unwrap_err();
        assert!(matches!(err, ClientError::MalformedToken(_)));
    }

    #[test]
    fn test_decode_claims_rejects_non_claims_json() {
        let token = token_with_payload("not json at all");
        assert!(matches!(
            decode_claims(&token),
            Err(ClientError::MalformedToken(_))
        ));
    }

    #[test]
    fn test_establish_and_query() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(dir.path());
        assert!(store.current_user().is_none());
        assert!(!store.is_administrator());

        let token = token_with_payload(r#"{"name":"Ada","email":"a@x.com","isAdmin":true}"#);
        store.establish(&token).unwrap();

        assert_eq!(store.current_user().unwrap().name, "Ada");
        assert!(store.is_administrator());
        assert!(dir.path().join(SESSION_FILE).exists());
    }

    #[test]
    fn test_failed_establish_keeps_prior_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(dir.path());

        let token = token_with_payload(r#"{"name":"Ada","email":"a@x.com"}"#);
        store.establish(&token).unwrap();

        let err = store.establish("header.!!bad!!.signature").unwrap_err();
        assert!(matches!(err, ClientError::MalformedToken(_)));
        assert_eq!(store.current_user().unwrap().name, "Ada");
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let token = token_with_payload(r#"{"name":"Ada","email":"a@x.com"}"#);
        SessionStore::open(dir.path()).establish(&token).unwrap();

        let reopened = SessionStore::open(dir.path());
        assert_eq!(reopened.current_user().unwrap().email, "a@x.com");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(dir.path());

        let token = token_with_payload(r#"{"name":"Ada","email":"a@x.com"}"#);
        store.establish(&token).unwrap();

        store.clear().unwrap();
        assert!(store.current_user().is_none());
        assert!(!dir.path().join(SESSION_FILE).exists());

        // Clearing again must not fail.
        store.clear().unwrap();
    }

    #[test]
    fn test_require_admin_gating() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(dir.path());
        assert!(store.require_user().is_err());
        assert!(store.require_admin().is_err());

        let token = token_with_payload(r#"{"name":"Ada","email":"a@x.com","isAdmin":false}"#);
        store.establish(&token).unwrap();
        assert!(store.require_user().is_ok());
        assert!(matches!(
            store.require_admin(),
            Err(ClientError::Validation(_))
        ));
    }
}

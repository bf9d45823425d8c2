use std::collections::HashMap;

use axum::http::{header::AUTHORIZATION, HeaderMap};

/// The authenticated principal attached to a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub uid: String,
    #[allow(dead_code)]
    pub token: String,
}

pub trait Authenticator: Send + Sync {
    /// Resolve the caller from request headers, or `None` if the call is anonymous.
    fn authenticate(&self, headers: &HeaderMap) -> Option<CallerIdentity>;
}

/// Accepts bearer tokens from a fixed table of `token -> uid`.
#[derive(Debug, Default, Clone)]
pub struct TokenAuthenticator {
    tokens: HashMap<String, String>,
}

impl TokenAuthenticator {
    pub fn new(tokens: HashMap<String, String>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Authenticator for TokenAuthenticator {
    fn authenticate(&self, headers: &HeaderMap) -> Option<CallerIdentity> {
        let token = bearer_token(headers)?;
        let uid = self.tokens.get(token)?;
        Some(CallerIdentity {
            uid: uid.clone(),
            token: token.to_string(),
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

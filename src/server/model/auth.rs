use serde::{Deserialize, Serialize};

/// JWT payload signed with the configured HS256 secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a string.
    pub sub: String,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Identity extracted from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}

impl AuthUser {
    /// Builds the identity from verified claims.
    ///
    /// Returns `None` when `sub` is not a numeric user id.
    pub fn from_claims(claims: Claims) -> Option<Self> {
        let user_id = claims.sub.parse().ok()?;

        Some(Self {
            user_id,
            username: claims.username,
            role: claims.role,
        })
    }
}

/// Who issued the current request.
///
/// Attached to every request by `middleware::auth::authenticate`. No endpoint
/// requires a signed-in caller; handlers only use it for logging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Caller {
    #[default]
    Anonymous,
    User(AuthUser),
}

impl Caller {
    /// Name used in log lines.
    pub fn name(&self) -> &str {
        match self {
            Self::Anonymous => "anonymous",
            Self::User(user) => &user.username,
        }
    }
}

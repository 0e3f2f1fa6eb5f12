//! Authenticated user model

use serde::{Deserialize, Serialize};

/// Role marker that unlocks audit-log visibility
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// The authenticated user as reported by the auth endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Role markers granted to the user
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserInfo {
    /// Whether the user carries the admin role marker
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == ADMIN_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin_requires_admin_marker() {
        let user: UserInfo =
            serde_json::from_str(r#"{"roles": ["ROLE_USER", "ROLE_ADMIN"]}"#).unwrap();
        assert!(user.is_admin());

        let user: UserInfo = serde_json::from_str(r#"{"roles": ["ROLE_USER"]}"#).unwrap();
        assert!(!user.is_admin());
    }

    #[test]
    fn test_missing_roles_defaults_to_no_access() {
        let user: UserInfo = serde_json::from_str("{}").unwrap();
        assert!(!user.is_admin());
    }
}

//! Caller identity and the data-visibility scope derived from it.

use std::collections::BTreeSet;

use uuid::Uuid;

/// Username bound to the scope when security is disabled.
pub const SYSTEM_USERNAME: &str = "system";

/// Role that grants unrestricted access across all hotels.
pub const SUPER_ADMIN_ROLE: &str = "ROLE_SUPER_ADMIN";

/// Already-authenticated caller, as supplied by the identity provider.
///
/// Token verification happens before this type is built; the core
/// trusts its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdentity {
    pub authenticated: bool,
    pub username: Option<String>,
    pub roles: BTreeSet<String>,
    /// `email` claim, if the token carried one.
    pub email: Option<String>,
    /// `preferred_username` claim, if the token carried one.
    pub preferred_username: Option<String>,
}

impl CallerIdentity {
    /// An unauthenticated caller (public endpoints).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Trimmed, lower-cased username; empty when absent.
    pub fn normalized_username(&self) -> String {
        self.username
            .as_deref()
            .map(normalize_username)
            .unwrap_or_default()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

/// Which hotels a caller may see for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessScope {
    /// Super admin, or security disabled.
    Unrestricted { username: String },
    /// Staff pinned to a single hotel.
    ScopedToHotel { username: String, hotel_id: Uuid },
}

impl AccessScope {
    /// Scope used when security is disabled and for public flows.
    pub fn system() -> Self {
        Self::Unrestricted {
            username: SYSTEM_USERNAME.to_string(),
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Self::Unrestricted { username } | Self::ScopedToHotel { username, .. } => username,
        }
    }

    /// The pinned hotel, or `None` for unrestricted callers.
    pub fn hotel_id(&self) -> Option<Uuid> {
        match self {
            Self::Unrestricted { .. } => None,
            Self::ScopedToHotel { hotel_id, .. } => Some(*hotel_id),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted { .. })
    }

    /// Whether a row owned by `hotel_id` is visible in this scope.
    pub fn permits(&self, hotel_id: Uuid) -> bool {
        match self {
            Self::Unrestricted { .. } => true,
            Self::ScopedToHotel { hotel_id: own, .. } => *own == hotel_id,
        }
    }

    /// Cache key segment distinguishing scopes: `all` or `hotel:{id}`.
    pub fn cache_tag(&self) -> String {
        match self {
            Self::Unrestricted { .. } => "all".to_string(),
            Self::ScopedToHotel { hotel_id, .. } => format!("hotel:{hotel_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_trimmed_and_lowercased() {
        let identity = CallerIdentity::authenticated("  Front.Desk@Lisbon ");
        assert_eq!(identity.normalized_username(), "front.desk@lisbon");
        assert_eq!(CallerIdentity::anonymous().normalized_username(), "");
    }

    #[test]
    fn scoped_scope_permits_only_its_hotel() {
        let own = Uuid::new_v4();
        let scope = AccessScope::ScopedToHotel {
            username: "desk".into(),
            hotel_id: own,
        };
        assert!(scope.permits(own));
        assert!(!scope.permits(Uuid::new_v4()));
        assert!(AccessScope::system().permits(Uuid::new_v4()));
    }

    #[test]
    fn cache_tags_differ_per_scope() {
        let hotel_id = Uuid::new_v4();
        let scoped = AccessScope::ScopedToHotel {
            username: "desk".into(),
            hotel_id,
        };
        assert_eq!(AccessScope::system().cache_tag(), "all");
        assert_eq!(scoped.cache_tag(), format!("hotel:{hotel_id}"));
    }
}

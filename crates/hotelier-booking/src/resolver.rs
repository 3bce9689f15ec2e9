//! Turns a caller identity into the data-visibility scope for one request.

use hotelier_core::access::{AccessScope, CallerIdentity};
use hotelier_core::error::HotelierResult;
use hotelier_core::repository::HotelUserScopeRepository;
use tracing::debug;

use crate::config::BookingConfig;
use crate::error::BookingError;

pub trait AccessScopeResolver: Send + Sync {
    fn resolve(
        &self,
        identity: &CallerIdentity,
    ) -> impl Future<Output = HotelierResult<AccessScope>> + Send;
}

/// Resolver used when security is switched off: everyone is `system`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSecurityResolver;

impl AccessScopeResolver for DisabledSecurityResolver {
    async fn resolve(&self, _identity: &CallerIdentity) -> HotelierResult<AccessScope> {
        Ok(AccessScope::system())
    }
}

/// Resolver backed by the staff-to-hotel mapping.
#[derive(Clone)]
pub struct HotelScopeResolver<S: HotelUserScopeRepository> {
    scopes: S,
    super_admin_role: String,
}

impl<S: HotelUserScopeRepository> HotelScopeResolver<S> {
    pub fn new(scopes: S, super_admin_role: impl Into<String>) -> Self {
        Self {
            scopes,
            super_admin_role: super_admin_role.into(),
        }
    }
}

impl<S: HotelUserScopeRepository> AccessScopeResolver for HotelScopeResolver<S> {
    async fn resolve(&self, identity: &CallerIdentity) -> HotelierResult<AccessScope> {
        if !identity.authenticated {
            return Err(BookingError::AuthenticationRequired.into());
        }

        let username = identity.normalized_username();
        if username.is_empty() {
            return Err(BookingError::EmptyUsername.into());
        }

        if identity.has_role(&self.super_admin_role) {
            debug!(username = %username, "Resolved unrestricted scope");
            return Ok(AccessScope::Unrestricted { username });
        }

        let Some(mapping) = self.scopes.find_by_username(&username).await? else {
            return Err(BookingError::NotAssigned { username }.into());
        };

        debug!(username = %username, hotel_id = %mapping.hotel_id, "Resolved hotel scope");
        Ok(AccessScope::ScopedToHotel {
            username,
            hotel_id: mapping.hotel_id,
        })
    }
}

/// Resolver selected at startup from [`BookingConfig::security_enabled`].
#[derive(Clone)]
pub enum ScopeResolver<S: HotelUserScopeRepository> {
    Disabled(DisabledSecurityResolver),
    HotelScoped(HotelScopeResolver<S>),
}

impl<S: HotelUserScopeRepository> ScopeResolver<S> {
    pub fn from_config(config: &BookingConfig, scopes: S) -> Self {
        if config.security_enabled {
            Self::HotelScoped(HotelScopeResolver::new(
                scopes,
                config.super_admin_role.clone(),
            ))
        } else {
            Self::Disabled(DisabledSecurityResolver)
        }
    }
}

impl<S: HotelUserScopeRepository> AccessScopeResolver for ScopeResolver<S> {
    async fn resolve(&self, identity: &CallerIdentity) -> HotelierResult<AccessScope> {
        match self {
            Self::Disabled(resolver) => resolver.resolve(identity).await,
            Self::HotelScoped(resolver) => resolver.resolve(identity).await,
        }
    }
}

//! Integration tests for access scope resolution.

mod common;

use hotelier_booking::{AccessScopeResolver, BookingConfig, DisabledSecurityResolver, ScopeResolver};
use hotelier_core::access::{AccessScope, CallerIdentity};
use hotelier_core::error::HotelierError;
use hotelier_db::repository::SurrealHotelUserScopeRepository;
use uuid::Uuid;

use common::{admin, setup, setup_with, staff};

#[tokio::test]
async fn anonymous_caller_is_unauthenticated() {
    let h = setup().await;

    let err = h
        .resolver
        .resolve(&CallerIdentity::anonymous())
        .await
        .unwrap_err();
    assert!(matches!(err, HotelierError::Unauthenticated { .. }));
}

#[tokio::test]
async fn blank_username_is_unauthenticated() {
    let h = setup().await;

    let err = h
        .resolver
        .resolve(&CallerIdentity::authenticated("   "))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNAUTHENTICATED");
}

#[tokio::test]
async fn super_admin_is_unrestricted() {
    let h = setup().await;

    let scope = h.resolver.resolve(&admin()).await.unwrap();
    assert_eq!(
        scope,
        AccessScope::Unrestricted {
            username: "root@example.com".into()
        }
    );
}

#[tokio::test]
async fn unmapped_staff_is_forbidden() {
    let h = setup().await;

    let err = h
        .resolver
        .resolve(&CallerIdentity::authenticated(" Bob "))
        .await
        .unwrap_err();
    match err {
        HotelierError::Forbidden { reason } => {
            assert_eq!(reason, "User is not assigned to any hotel: bob");
        }
        other => panic!("expected Forbidden, got {other:?}"),
    }
}

#[tokio::test]
async fn mapped_staff_is_scoped_to_their_hotel() {
    let h = setup().await;
    let hotel_id = Uuid::new_v4();
    let identity = staff(&h, "Carla", hotel_id).await;

    let scope = h.resolver.resolve(&identity).await.unwrap();
    assert_eq!(scope.hotel_id(), Some(hotel_id));
    assert_eq!(scope.username(), "carla");
    assert!(!scope.is_unrestricted());
}

#[tokio::test]
async fn super_admin_role_is_configurable() {
    let h = setup_with(BookingConfig {
        super_admin_role: "ROLE_OWNER".into(),
        ..BookingConfig::default()
    })
    .await;

    let owner = CallerIdentity::authenticated("owner").with_role("ROLE_OWNER");
    assert!(h.resolver.resolve(&owner).await.unwrap().is_unrestricted());

    // The default role no longer grants anything.
    let err = h.resolver.resolve(&admin()).await.unwrap_err();
    assert!(matches!(err, HotelierError::Forbidden { .. }));
}

#[tokio::test]
async fn disabled_security_resolves_everyone_to_system() {
    let h = setup_with(BookingConfig {
        security_enabled: false,
        ..BookingConfig::default()
    })
    .await;

    for identity in [CallerIdentity::anonymous(), CallerIdentity::authenticated("bob")] {
        let scope = h.resolver.resolve(&identity).await.unwrap();
        assert_eq!(scope, AccessScope::system());
        assert_eq!(scope.username(), "system");
    }

    let scope = DisabledSecurityResolver
        .resolve(&CallerIdentity::anonymous())
        .await
        .unwrap();
    assert!(scope.is_unrestricted());
}

#[tokio::test]
async fn resolver_choice_follows_config() {
    let h = setup().await;
    let repo = SurrealHotelUserScopeRepository::new(h.db.clone());

    let enabled = ScopeResolver::from_config(&BookingConfig::default(), repo.clone());
    assert!(matches!(enabled, ScopeResolver::HotelScoped(_)));

    let disabled = ScopeResolver::from_config(
        &BookingConfig {
            security_enabled: false,
            ..BookingConfig::default()
        },
        repo,
    );
    assert!(matches!(disabled, ScopeResolver::Disabled(_)));
}

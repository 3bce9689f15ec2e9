//! Hotelier Core: domain models, repository traits, access scopes and
//! error types shared by every other crate.

pub mod access;
pub mod cache;
pub mod error;
pub mod models;
pub mod repository;

pub use access::{AccessScope, CallerIdentity};
pub use error::{HotelierError, HotelierResult};

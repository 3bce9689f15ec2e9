//! Hotelier booking core: access scoping, scope-aware entity access,
//! booking orchestration, recommendations and cache-aside projections.

pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod guest;
pub mod hotel;
pub mod payment;
pub mod presentation;
pub mod pricing;
pub mod public;
pub mod recommendation;
pub mod resolver;
pub mod room;
pub mod service;

pub use cache::BookingCache;
pub use config::BookingConfig;
pub use error::BookingError;
pub use gateway::ScopedEntityGateway;
pub use guest::{GuestInput, GuestService};
pub use hotel::{HotelInput, HotelService};
pub use presentation::RoomPresentation;
pub use public::{MAX_ROOM_HIGHLIGHTS, PublicContentService, RoomHighlight};
pub use recommendation::RecommendationTrigger;
pub use resolver::{AccessScopeResolver, DisabledSecurityResolver, HotelScopeResolver, ScopeResolver};
pub use room::{RoomInput, RoomService, RoomUpdateInput};
pub use service::{BookingService, CreateBookingInput, PublicBookingInput};

//! Domain models for the hotel booking backend.
//!
//! Hotels, rooms, guests and bookings live in the relational store.
//! Recommendations are documents in a separate store. Callers receive
//! bookings as flat [`booking::BookingView`] projections.

pub mod booking;
pub mod guest;
pub mod hotel;
pub mod recommendation;
pub mod room;
pub mod user_scope;

//! FoodShare Demo Library
//!
//! This library exposes the demo's internal modules for integration testing.

pub mod args;
pub mod auth;
pub mod constants;
pub mod roles;
pub mod view;

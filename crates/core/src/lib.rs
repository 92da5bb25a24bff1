//! `autolot-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the vehicle and
//! dealership crates (no IO, no presentation concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::VehicleId;
pub use value_object::ValueObject;

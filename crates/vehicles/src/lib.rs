//! Vehicles domain module.
//!
//! Value components, ownership documents, the car/truck hierarchy and the
//! factory that assembles them. Pure, deterministic domain logic (no IO).

pub mod components;
pub mod factory;
pub mod item;
pub mod registration;
pub mod vehicle;

pub use components::{Engine, RefrigerationUnit, Trailer, Wheel};
pub use factory::{CarSpec, Factory, TruckSpec};
pub use item::ModelItem;
pub use registration::{RegistrationAuthority, Title};
pub use vehicle::{
    Car, DEFAULT_SPEED_DELTA, LoadOutcome, SharedVehicle, Truck, Vehicle, VehicleKind,
};

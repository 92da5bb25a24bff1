//! Tagged union of model objects accepted by type-constrained operations.
//!
//! Fitting a wheel, comparing speeds and stocking a dealership all accept "some
//! model object" and check its variant explicitly, failing with
//! [`DomainError::TypeConstraint`] on a mismatch.

use autolot_core::{DomainError, DomainResult};

use crate::components::{Engine, RefrigerationUnit, Trailer, Wheel};
use crate::registration::Title;
use crate::vehicle::SharedVehicle;

#[derive(Debug, Clone)]
pub enum ModelItem {
    Wheel(Wheel),
    Engine(Engine),
    Trailer(Trailer),
    Refrigeration(RefrigerationUnit),
    Title(Title),
    Vehicle(SharedVehicle),
}

impl ModelItem {
    /// Variant name used in type-constraint errors.
    ///
    /// A vehicle that is mutably borrowed (e.g. being handed to its own
    /// `add_wheel`) reports the generic name "Vehicle".
    pub fn kind_name(&self) -> &'static str {
        match self {
            ModelItem::Wheel(_) => "Wheel",
            ModelItem::Engine(_) => "Engine",
            ModelItem::Trailer(_) => "Trailer",
            ModelItem::Refrigeration(_) => "RefrigerationUnit",
            ModelItem::Title(_) => "Title",
            ModelItem::Vehicle(v) => v.try_borrow().map_or("Vehicle", |v| v.kind_name()),
        }
    }

    pub fn into_wheel(self) -> DomainResult<Wheel> {
        match self {
            ModelItem::Wheel(wheel) => Ok(wheel),
            other => Err(DomainError::type_constraint("Wheel", other.kind_name())),
        }
    }

    pub fn as_vehicle(&self) -> DomainResult<&SharedVehicle> {
        match self {
            ModelItem::Vehicle(vehicle) => Ok(vehicle),
            other => Err(DomainError::type_constraint("Vehicle", other.kind_name())),
        }
    }

    pub fn into_vehicle(self) -> DomainResult<SharedVehicle> {
        match self {
            ModelItem::Vehicle(vehicle) => Ok(vehicle),
            other => Err(DomainError::type_constraint("Vehicle", other.kind_name())),
        }
    }
}

impl From<Wheel> for ModelItem {
    fn from(value: Wheel) -> Self {
        ModelItem::Wheel(value)
    }
}

impl From<Engine> for ModelItem {
    fn from(value: Engine) -> Self {
        ModelItem::Engine(value)
    }
}

impl From<Trailer> for ModelItem {
    fn from(value: Trailer) -> Self {
        ModelItem::Trailer(value)
    }
}

impl From<RefrigerationUnit> for ModelItem {
    fn from(value: RefrigerationUnit) -> Self {
        ModelItem::Refrigeration(value)
    }
}

impl From<Title> for ModelItem {
    fn from(value: Title) -> Self {
        ModelItem::Title(value)
    }
}

impl From<SharedVehicle> for ModelItem {
    fn from(value: SharedVehicle) -> Self {
        ModelItem::Vehicle(value)
    }
}

impl From<&SharedVehicle> for ModelItem {
    fn from(value: &SharedVehicle) -> Self {
        ModelItem::Vehicle(SharedVehicle::clone(value))
    }
}

use core::fmt;
use std::rc::Rc;

use autolot_core::{DomainError, DomainResult, VehicleId};
use autolot_vehicles::{ModelItem, SharedVehicle};

/// Dealership holding shared references to vehicles, in insertion order.
#[derive(Debug, Clone)]
pub struct Dealership {
    name: String,
    vehicles: Vec<SharedVehicle>,
}

impl Dealership {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vehicles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &SharedVehicle> {
        self.vehicles.iter()
    }

    /// Stock a vehicle. Anything that is not a vehicle is rejected.
    pub fn add_vehicle(&mut self, item: impl Into<ModelItem>) -> DomainResult<()> {
        let vehicle = item.into().into_vehicle()?;
        tracing::info!(
            dealership = %self.name,
            vehicle = %vehicle.borrow().vehicle_id(),
            kind = vehicle.borrow().kind_name(),
            "vehicle added"
        );
        self.vehicles.push(vehicle);
        Ok(())
    }

    pub fn find(&self, id: VehicleId) -> DomainResult<SharedVehicle> {
        self.vehicles
            .iter()
            .find(|v| v.borrow().vehicle_id() == id)
            .map(Rc::clone)
            .ok_or_else(DomainError::not_found)
    }

    /// One summary per vehicle, in the order they were added.
    pub fn list(&self) -> Vec<String> {
        self.vehicles.iter().map(|v| v.borrow().describe()).collect()
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Summary line, a blank separator, then every vehicle summary.
    pub fn report(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.vehicles.len() + 2);
        lines.push(self.describe());
        lines.push(String::new());
        lines.extend(self.list());
        lines
    }
}

impl fmt::Display for Dealership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dealership {} - {} vehicles", self.name, self.vehicles.len())
    }
}

//! Factory that turns build specs into fully-wheeled vehicles.

use core::fmt;

use autolot_core::DomainResult;

use crate::components::{Engine, RefrigerationUnit, Trailer, Wheel};
use crate::registration::Title;
use crate::vehicle::{Car, DEFAULT_DOORS, Truck, Vehicle};

pub const CAR_WHEEL_COUNT: usize = 4;
pub const TRUCK_WHEEL_COUNT: usize = 6;

const CAR_WHEEL_BRAND: &str = "Michelin";
const CAR_WHEEL_TREAD: &str = "All-Season";
const TRUCK_WHEEL_BRAND: &str = "Bridgestone";
const TRUCK_WHEEL_TREAD: &str = "Heavy-Duty";

/// Build request for a car.
#[derive(Debug, Clone, PartialEq)]
pub struct CarSpec {
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub doors: u8,
    pub title: Option<Title>,
}

impl CarSpec {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: u16) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            doors: DEFAULT_DOORS,
            title: None,
        }
    }
}

/// Build request for a truck.
#[derive(Debug, Clone, PartialEq)]
pub struct TruckSpec {
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub capacity_kg: u64,
    pub engine: Option<Engine>,
    pub refrigeration: Option<RefrigerationUnit>,
    pub trailer: Option<Trailer>,
    pub title: Option<Title>,
}

impl TruckSpec {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        capacity_kg: u64,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            capacity_kg,
            engine: None,
            refrigeration: None,
            trailer: None,
            title: None,
        }
    }
}

/// Vehicle manufacturer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factory {
    name: String,
}

impl Factory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Build a car with four all-season wheels.
    pub fn build_car(&self, spec: CarSpec) -> DomainResult<Vehicle> {
        let mut car = Vehicle::new(spec.brand, spec.model, spec.year, Car::new(spec.doors))
            .with_title(spec.title);
        fit_wheels(&mut car, CAR_WHEEL_COUNT, CAR_WHEEL_BRAND, CAR_WHEEL_TREAD)?;
        tracing::debug!(factory = %self.name, vehicle = %car.vehicle_id(), "car built");
        Ok(car)
    }

    /// Build a truck with six heavy-duty wheels.
    pub fn build_truck(&self, spec: TruckSpec) -> DomainResult<Vehicle> {
        let mut body = Truck::new(spec.capacity_kg);
        if let Some(engine) = spec.engine {
            body = body.with_engine(engine);
        }
        if let Some(unit) = spec.refrigeration {
            body = body.with_refrigeration(unit);
        }
        if let Some(trailer) = spec.trailer {
            body = body.with_trailer(trailer);
        }

        let mut truck = Vehicle::new(spec.brand, spec.model, spec.year, body).with_title(spec.title);
        fit_wheels(&mut truck, TRUCK_WHEEL_COUNT, TRUCK_WHEEL_BRAND, TRUCK_WHEEL_TREAD)?;
        tracing::debug!(factory = %self.name, vehicle = %truck.vehicle_id(), "truck built");
        Ok(truck)
    }
}

fn fit_wheels(vehicle: &mut Vehicle, count: usize, brand: &str, tread: &str) -> DomainResult<()> {
    for _ in 0..count {
        vehicle.add_wheel(Wheel::new(brand, tread))?;
    }
    Ok(())
}

impl fmt::Display for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factory {}", self.name)
    }
}

//! The fixed demo scenario: one registry, two titles, a factory, a car, a truck
//! and a dealership stocking both.

use std::rc::Rc;

use serde::Serialize;

use autolot_core::DomainResult;
use autolot_dealership::Dealership;
use autolot_vehicles::{
    CarSpec, Engine, Factory, RefrigerationUnit, RegistrationAuthority, SharedVehicle, Title,
    Trailer, TruckSpec,
};

/// One labelled value of the on-screen state panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateEntry {
    pub label: &'static str,
    pub value: String,
}

impl StateEntry {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// In-memory aggregate of everything one demo run works with.
#[derive(Debug)]
pub struct DemoSession {
    authority: Rc<RegistrationAuthority>,
    factory: Factory,
    dealership: Dealership,
    car: SharedVehicle,
    truck: SharedVehicle,
}

impl DemoSession {
    pub fn authority(&self) -> &RegistrationAuthority {
        &self.authority
    }

    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    pub fn dealership(&self) -> &Dealership {
        &self.dealership
    }

    pub fn car(&self) -> &SharedVehicle {
        &self.car
    }

    pub fn truck(&self) -> &SharedVehicle {
        &self.truck
    }

    /// Dealership name, vehicle count and both speeds.
    pub fn state(&self) -> Vec<StateEntry> {
        vec![
            StateEntry::new("Dealership", self.dealership.name()),
            StateEntry::new("Vehicles", self.dealership.len().to_string()),
            StateEntry::new("Car speed", format!("{} km/h", self.car.borrow().speed())),
            StateEntry::new("Truck speed", format!("{} km/h", self.truck.borrow().speed())),
        ]
    }
}

pub fn create_demo_session() -> DomainResult<DemoSession> {
    let authority = Rc::new(RegistrationAuthority::new("Mendoza"));
    let car_title = Title::new("Ivo Barbato", Some(Rc::clone(&authority)))?;
    let truck_title = Title::new("Transporte Andino S.A.", Some(Rc::clone(&authority)))?;

    let factory = Factory::new("Andes Motors");

    let mut car_spec = CarSpec::new("Toyota", "Corolla", 2020);
    car_spec.title = Some(car_title);
    let car = factory.build_car(car_spec)?.into_shared();

    let mut truck_spec = TruckSpec::new("Scania", "R500", 2022, 18_000);
    truck_spec.engine = Some(Engine::new("V8 Diesel", 500).with_description("Euro 6"));
    truck_spec.refrigeration = Some(RefrigerationUnit::new(-20));
    truck_spec.trailer = Some(Trailer::new(12.0));
    truck_spec.title = Some(truck_title);
    let truck = factory.build_truck(truck_spec)?.into_shared();

    let mut dealership = Dealership::new("Ruta 40");
    dealership.add_vehicle(&car)?;
    dealership.add_vehicle(&truck)?;

    let session = DemoSession {
        authority,
        factory,
        dealership,
        car,
        truck,
    };
    tracing::info!(dealership = %session.dealership, "demo session created");
    tracing::debug!(?session, "demo session contents");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_stocks_car_then_truck() {
        let session = create_demo_session().unwrap();
        let list = session.dealership().list();
        assert_eq!(list.len(), 2);
        assert!(list[0].starts_with("Car Toyota Corolla (2020) · 4 wheels"));
        assert!(list[1].starts_with("Truck Scania R500 (2022) · 6 wheels"));
        assert!(list[1].contains("Transporte Andino S.A."));
    }

    #[test]
    fn dealership_shares_the_session_vehicles() {
        let session = create_demo_session().unwrap();
        let car_id = session.car().borrow().vehicle_id();
        let stocked = session.dealership().find(car_id).unwrap();
        assert!(Rc::ptr_eq(&stocked, session.car()));

        session.car().borrow_mut().accelerate(20);
        assert_eq!(stocked.borrow().speed(), 20);
    }

    #[test]
    fn titles_share_one_authority() {
        let session = create_demo_session().unwrap();
        assert_eq!(session.authority().province(), "Mendoza");
        assert_eq!(session.factory().name(), "Andes Motors");
        let car = session.car().borrow();
        let truck = session.truck().borrow();
        assert_eq!(
            car.title().and_then(Title::authority),
            truck.title().and_then(Title::authority)
        );
    }

    #[test]
    fn initial_state_is_at_rest() {
        let session = create_demo_session().unwrap();
        let state = session.state();
        let values: Vec<(&str, &str)> = state.iter().map(|e| (e.label, e.value.as_str())).collect();
        assert_eq!(
            values,
            vec![
                ("Dealership", "Ruta 40"),
                ("Vehicles", "2"),
                ("Car speed", "0 km/h"),
                ("Truck speed", "0 km/h"),
            ]
        );
    }

    #[test]
    fn demo_truck_load_scenario() {
        let session = create_demo_session().unwrap();
        let truck = session.truck().borrow();
        let over = truck.load(20_000).unwrap().to_string();
        assert!(over.contains("20000") && over.contains("18000"));
        assert!(truck.load(15_000).unwrap().to_string().contains("15000"));
    }
}

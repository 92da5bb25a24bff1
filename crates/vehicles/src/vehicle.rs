//! Vehicle base type and its variants (car, truck).

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use autolot_core::{DomainError, DomainResult, Entity, VehicleId};

use crate::components::{Engine, RefrigerationUnit, Trailer, Wheel};
use crate::item::ModelItem;
use crate::registration::Title;

/// Step used when no explicit delta is given (km/h).
pub const DEFAULT_SPEED_DELTA: i32 = 10;

/// Doors on a car unless stated otherwise.
pub const DEFAULT_DOORS: u8 = 4;

/// A vehicle referenced from more than one place (session and dealership).
pub type SharedVehicle = Rc<RefCell<Vehicle>>;

/// Passenger car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car {
    doors: u8,
}

impl Car {
    pub fn new(doors: u8) -> Self {
        Self { doors }
    }

    pub fn doors(&self) -> u8 {
        self.doors
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new(DEFAULT_DOORS)
    }
}

/// Cargo truck with optional engine, refrigeration unit and trailer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Truck {
    capacity_kg: u64,
    engine: Option<Engine>,
    refrigeration: Option<RefrigerationUnit>,
    trailer: Option<Trailer>,
}

impl Truck {
    pub fn new(capacity_kg: u64) -> Self {
        Self {
            capacity_kg,
            ..Self::default()
        }
    }

    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_refrigeration(mut self, unit: RefrigerationUnit) -> Self {
        self.refrigeration = Some(unit);
        self
    }

    pub fn with_trailer(mut self, trailer: Trailer) -> Self {
        self.trailer = Some(trailer);
        self
    }

    pub fn capacity_kg(&self) -> u64 {
        self.capacity_kg
    }

    pub fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    pub fn refrigeration(&self) -> Option<&RefrigerationUnit> {
        self.refrigeration.as_ref()
    }

    pub fn trailer(&self) -> Option<&Trailer> {
        self.trailer.as_ref()
    }

    /// Check whether `weight_kg` fits. Does not change the truck.
    pub fn load(&self, weight_kg: u64) -> LoadOutcome {
        if weight_kg <= self.capacity_kg {
            LoadOutcome::Loaded { weight_kg }
        } else {
            LoadOutcome::OverCapacity {
                weight_kg,
                capacity_kg: self.capacity_kg,
            }
        }
    }
}

/// Result of offering a load to a truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { weight_kg: u64 },
    OverCapacity { weight_kg: u64, capacity_kg: u64 },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadOutcome::Loaded { weight_kg } => write!(f, "Loaded {weight_kg} kg"),
            LoadOutcome::OverCapacity {
                weight_kg,
                capacity_kg,
            } => write!(f, "Exceeds capacity ({weight_kg} > {capacity_kg})"),
        }
    }
}

/// Variant-specific state.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleKind {
    Car(Car),
    Truck(Truck),
}

impl VehicleKind {
    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Car(_) => "Car",
            VehicleKind::Truck(_) => "Truck",
        }
    }
}

impl From<Car> for VehicleKind {
    fn from(value: Car) -> Self {
        VehicleKind::Car(value)
    }
}

impl From<Truck> for VehicleKind {
    fn from(value: Truck) -> Self {
        VehicleKind::Truck(value)
    }
}

/// A car or a truck.
///
/// Speed is never negative and the wheel collection only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: VehicleId,
    brand: String,
    model: String,
    year: u16,
    speed_kmh: u32,
    wheels: Vec<Wheel>,
    title: Option<Title>,
    kind: VehicleKind,
}

impl Vehicle {
    /// A stationary vehicle with no wheels and no title.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        kind: impl Into<VehicleKind>,
    ) -> Self {
        Self {
            id: VehicleId::new(),
            brand: brand.into(),
            model: model.into(),
            year,
            speed_kmh: 0,
            wheels: Vec::new(),
            title: None,
            kind: kind.into(),
        }
    }

    pub fn with_title(mut self, title: Option<Title>) -> Self {
        self.title = title;
        self
    }

    pub fn into_shared(self) -> SharedVehicle {
        Rc::new(RefCell::new(self))
    }

    pub fn vehicle_id(&self) -> VehicleId {
        self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn speed(&self) -> u32 {
        self.speed_kmh
    }

    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    /// "Car" or "Truck".
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn as_car(&self) -> Option<&Car> {
        match &self.kind {
            VehicleKind::Car(car) => Some(car),
            VehicleKind::Truck(_) => None,
        }
    }

    pub fn as_truck(&self) -> Option<&Truck> {
        match &self.kind {
            VehicleKind::Truck(truck) => Some(truck),
            VehicleKind::Car(_) => None,
        }
    }

    /// Replace the title, returning the previous one.
    pub fn attach_title(&mut self, title: Title) -> Option<Title> {
        self.title.replace(title)
    }

    /// Speed up by `delta_kmh` (negative deltas slow down) and return the new speed.
    pub fn accelerate(&mut self, delta_kmh: i32) -> u32 {
        self.shift_speed(i64::from(delta_kmh))
    }

    /// Slow down by `delta_kmh`, stopping at zero, and return the new speed.
    pub fn brake(&mut self, delta_kmh: i32) -> u32 {
        self.shift_speed(-i64::from(delta_kmh))
    }

    pub fn accelerate_default(&mut self) -> u32 {
        self.accelerate(DEFAULT_SPEED_DELTA)
    }

    pub fn brake_default(&mut self) -> u32 {
        self.brake(DEFAULT_SPEED_DELTA)
    }

    fn shift_speed(&mut self, delta: i64) -> u32 {
        let next = (i64::from(self.speed_kmh) + delta).clamp(0, i64::from(u32::MAX));
        // Clamped into u32 range above.
        self.speed_kmh = next as u32;
        tracing::debug!(vehicle = %self.id, kind = self.kind_name(), delta, speed = self.speed_kmh, "speed changed");
        self.speed_kmh
    }

    /// Fit a wheel. Anything other than a wheel is rejected and leaves the
    /// wheel collection untouched. Returns the new wheel count.
    pub fn add_wheel(&mut self, item: impl Into<ModelItem>) -> DomainResult<usize> {
        let wheel = item.into().into_wheel()?;
        tracing::debug!(vehicle = %self.id, %wheel, "wheel fitted");
        self.wheels.push(wheel);
        Ok(self.wheels.len())
    }

    /// Offer a load to this vehicle. Only trucks carry cargo.
    pub fn load(&self, weight_kg: u64) -> DomainResult<LoadOutcome> {
        self.as_truck()
            .map(|truck| truck.load(weight_kg))
            .ok_or_else(|| DomainError::type_constraint("Truck", self.kind_name()))
    }

    /// Compare speeds against any model object; fails unless it is a vehicle.
    pub fn compare_speed(&self, other: &ModelItem) -> DomainResult<String> {
        let other = other.as_vehicle()?;
        // The receiver may be `other` itself, reached through a live borrow.
        if core::ptr::eq(self, other.as_ptr().cast_const()) {
            return Ok(self.compare_speed_with(self));
        }
        Ok(self.compare_speed_with(&other.borrow()))
    }

    pub fn compare_speed_with(&self, other: &Vehicle) -> String {
        if self.speed_kmh == other.speed_kmh {
            return "Both vehicles are travelling at the same speed.".to_string();
        }
        let faster = if self.speed_kmh > other.speed_kmh {
            self
        } else {
            other
        };
        format!("{} is faster: {} km/h", faster.kind_name(), faster.speed_kmh)
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}) · {} wheels · ",
            self.kind_name(),
            self.brand,
            self.model,
            self.year,
            self.wheels.len()
        )?;
        match &self.title {
            Some(title) => write!(f, "{title}")?,
            None => f.write_str("No title")?,
        }

        match &self.kind {
            VehicleKind::Car(car) => write!(f, " · {} doors", car.doors),
            VehicleKind::Truck(truck) => {
                write!(f, " · capacity {} kg", truck.capacity_kg)?;
                if let Some(engine) = &truck.engine {
                    write!(f, " · engine {engine}")?;
                }
                if let Some(unit) = &truck.refrigeration {
                    write!(f, " · {unit}")?;
                }
                if let Some(trailer) = &truck.trailer {
                    write!(f, " · {trailer}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::RegistrationAuthority;

    fn corolla() -> Vehicle {
        Vehicle::new("Toyota", "Corolla", 2020, Car::default())
    }

    fn scania(capacity_kg: u64) -> Vehicle {
        Vehicle::new("Scania", "R500", 2022, Truck::new(capacity_kg))
    }

    #[test]
    fn new_vehicle_is_stationary_and_bare() {
        let car = corolla();
        assert_eq!(car.speed(), 0);
        assert!(car.wheels().is_empty());
        assert!(car.title().is_none());
        assert_eq!(car.as_car().map(Car::doors), Some(4));
    }

    #[test]
    fn accelerate_and_brake_use_default_step() {
        let mut car = corolla();
        assert_eq!(car.accelerate_default(), 10);
        assert_eq!(car.accelerate(25), 35);
        assert_eq!(car.brake_default(), 25);
    }

    #[test]
    fn brake_stops_at_zero() {
        let mut truck = scania(18000);
        truck.accelerate(5);
        assert_eq!(truck.brake(10), 0);
        assert_eq!(truck.brake(10), 0);
    }

    #[test]
    fn negative_accelerate_is_clamped() {
        let mut car = corolla();
        assert_eq!(car.accelerate(-50), 0);
    }

    #[test]
    fn add_wheel_appends_and_counts() {
        let mut car = corolla();
        assert_eq!(car.add_wheel(Wheel::new("Pirelli", "Sport")).unwrap(), 1);
        assert_eq!(car.add_wheel(Wheel::new("Pirelli", "Sport")).unwrap(), 2);
        assert_eq!(car.wheels()[1].brand(), "Pirelli");
    }

    #[test]
    fn add_wheel_rejects_non_wheel_without_mutation() {
        let mut car = corolla();
        car.add_wheel(Wheel::new("Pirelli", "Sport")).unwrap();

        let err = car.add_wheel(Engine::new("V8", 400)).unwrap_err();
        assert_eq!(err, DomainError::type_constraint("Wheel", "Engine"));
        assert_eq!(car.wheels().len(), 1);
    }

    #[test]
    fn car_summary_lists_identity_wheels_title_and_doors() {
        let rna = Rc::new(RegistrationAuthority::new("Mendoza"));
        let title = Title::new("Ivo Barbato", Some(rna)).unwrap();
        let mut car = corolla().with_title(Some(title));
        for _ in 0..4 {
            car.add_wheel(Wheel::new("Michelin", "All-Season")).unwrap();
        }

        assert_eq!(
            car.describe(),
            "Car Toyota Corolla (2020) · 4 wheels · Title held by Ivo Barbato · \
             Registry · Province: Mendoza · 4 doors"
        );
    }

    #[test]
    fn untitled_vehicle_says_so() {
        assert!(corolla().describe().contains("No title"));
    }

    #[test]
    fn truck_summary_omits_absent_components() {
        let bare = scania(18000);
        assert_eq!(
            bare.describe(),
            "Truck Scania R500 (2022) · 0 wheels · No title · capacity 18000 kg"
        );

        let equipped = Vehicle::new(
            "Scania",
            "R500",
            2022,
            Truck::new(18000)
                .with_engine(Engine::new("V8 Diesel", 500).with_description("Euro 6"))
                .with_refrigeration(RefrigerationUnit::new(-20))
                .with_trailer(Trailer::new(12.0)),
        );
        assert!(equipped.describe().ends_with(
            "capacity 18000 kg · engine V8 Diesel · 500 HP - Euro 6 · \
             Refrigeration unit -20°C · Trailer 12 m"
        ));

        let trailer_only = Vehicle::new(
            "Iveco",
            "Stralis",
            2018,
            Truck::new(9000).with_trailer(Trailer::new(8.5)),
        );
        let summary = trailer_only.describe();
        assert!(summary.ends_with("capacity 9000 kg · Trailer 8.5 m"));
        assert!(!summary.contains("engine"));
    }

    #[test]
    fn load_reports_over_capacity_with_both_values() {
        let truck = scania(18000);
        let over = truck.load(20000).unwrap();
        assert!(!over.is_loaded());
        let msg = over.to_string();
        assert!(msg.contains("20000"));
        assert!(msg.contains("18000"));

        let ok = truck.load(15000).unwrap();
        assert!(ok.is_loaded());
        assert!(ok.to_string().contains("15000"));

        assert!(truck.load(18000).unwrap().is_loaded());
    }

    #[test]
    fn load_on_a_car_is_a_type_constraint() {
        let err = corolla().load(100).unwrap_err();
        assert_eq!(err, DomainError::type_constraint("Truck", "Car"));
    }

    #[test]
    fn compare_speed_ties_at_rest() {
        let car = corolla();
        let truck = scania(18000).into_shared();
        assert_eq!(
            car.compare_speed(&ModelItem::from(&truck)).unwrap(),
            "Both vehicles are travelling at the same speed."
        );
    }

    #[test]
    fn compare_speed_names_faster_variant() {
        let mut car = corolla();
        let truck = scania(18000).into_shared();
        car.accelerate(35);
        assert_eq!(
            car.compare_speed(&ModelItem::from(&truck)).unwrap(),
            "Car is faster: 35 km/h"
        );

        truck.borrow_mut().accelerate(80);
        assert_eq!(
            car.compare_speed(&ModelItem::from(&truck)).unwrap(),
            "Truck is faster: 80 km/h"
        );
    }

    #[test]
    fn compare_speed_rejects_non_vehicle() {
        let car = corolla();
        let err = car
            .compare_speed(&ModelItem::from(Wheel::new("Michelin", "All-Season")))
            .unwrap_err();
        assert!(err.is_type_constraint());
    }

    #[test]
    fn compare_speed_against_itself_ties() {
        let car = corolla().into_shared();
        car.borrow_mut().accelerate(40);
        let msg = car.borrow().compare_speed(&ModelItem::from(&car)).unwrap();
        assert_eq!(msg, "Both vehicles are travelling at the same speed.");
    }

    #[test]
    fn add_wheel_rejects_its_own_vehicle() {
        let car = corolla().into_shared();
        let mut guard = car.borrow_mut();

        let err = guard.add_wheel(&car).unwrap_err();
        assert_eq!(err, DomainError::type_constraint("Wheel", "Vehicle"));
        assert!(guard.wheels().is_empty());
    }

    #[test]
    fn compare_speed_with_itself_while_mutably_borrowed_ties() {
        let car = corolla().into_shared();
        let mut guard = car.borrow_mut();
        guard.accelerate(10);

        let msg = guard.compare_speed(&ModelItem::from(&car)).unwrap();
        assert_eq!(msg, "Both vehicles are travelling at the same speed.");
    }

    #[test]
    fn attach_title_replaces_previous() {
        let mut car = corolla();
        assert!(car.attach_title(Title::new("A", None).unwrap()).is_none());
        let previous = car.attach_title(Title::new("B", None).unwrap());
        assert_eq!(previous.map(|t| t.owner().to_string()), Some("A".to_string()));
        assert_eq!(car.title().map(Title::owner), Some("B"));
    }

    #[test]
    fn vehicles_carry_distinct_identities() {
        let a = corolla();
        let b = corolla();
        assert_ne!(Entity::id(&a), Entity::id(&b));
        assert_eq!(*Entity::id(&a), a.vehicle_id());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Step {
            Accelerate(i32),
            Brake(i32),
        }

        fn step() -> impl Strategy<Value = Step> {
            prop_oneof![
                (-500i32..500).prop_map(Step::Accelerate),
                (-500i32..500).prop_map(Step::Brake),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: accelerate(d) then brake(d) restores the starting speed.
            #[test]
            fn accelerate_then_brake_round_trips(start in 0u32..10_000, delta in 0i32..10_000) {
                let mut car = corolla();
                car.accelerate(start as i32);
                let before = car.speed();

                car.accelerate(delta);
                let after = car.brake(delta);

                prop_assert_eq!(after, before);
            }

            /// Property: brake(d) then accelerate(d) never lands below the start minus d.
            #[test]
            fn brake_then_accelerate_clamps_at_zero(start in 0i32..1_000, delta in 0i32..1_000) {
                let mut truck = scania(1);
                truck.accelerate(start);
                truck.brake(delta);
                let expected = (start - delta).max(0) + delta;
                prop_assert_eq!(truck.accelerate(delta), expected as u32);
            }

            /// Property: the speed seen after every step equals the clamped running sum.
            #[test]
            fn speed_tracks_clamped_running_sum(steps in prop::collection::vec(step(), 0..50)) {
                let mut car = corolla();
                let mut expected: i64 = 0;
                for s in steps {
                    let (got, delta) = match s {
                        Step::Accelerate(d) => (car.accelerate(d), i64::from(d)),
                        Step::Brake(d) => (car.brake(d), -i64::from(d)),
                    };
                    expected = (expected + delta).max(0);
                    prop_assert_eq!(i64::from(got), expected);
                }
            }

            /// Property: a failed add_wheel never changes the wheel count.
            #[test]
            fn rejected_items_leave_wheels_untouched(fitted in 0usize..8, hp in 0u32..2_000) {
                let mut truck = scania(1);
                for _ in 0..fitted {
                    truck.add_wheel(Wheel::new("Bridgestone", "Heavy-Duty")).unwrap();
                }
                let err = truck.add_wheel(Engine::new("V8", hp)).unwrap_err();
                prop_assert!(err.is_type_constraint());
                prop_assert_eq!(truck.wheels().len(), fitted);
            }

            /// Property: load is over capacity iff weight > capacity.
            #[test]
            fn load_outcome_matches_capacity(capacity in 0u64..100_000, weight in 0u64..100_000) {
                let outcome = Truck::new(capacity).load(weight);
                prop_assert_eq!(outcome.is_loaded(), weight <= capacity);
            }
        }
    }
}

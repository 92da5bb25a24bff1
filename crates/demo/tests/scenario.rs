//! Black-box run of the demo through the public controller API.

use autolot_core::DomainError;
use autolot_demo::{Action, Controller, DemoConfig, NO_SESSION_MESSAGE, create_demo_session};
use autolot_vehicles::{ModelItem, Wheel};

fn run(actions: &[&str]) -> Vec<String> {
    let mut controller = Controller::new(DemoConfig::default());
    actions
        .iter()
        .map(|a| a.parse::<Action>().unwrap())
        .map(|a| controller.dispatch(a).unwrap().message)
        .collect()
}

#[test]
fn default_script_ends_with_car_ahead() {
    let messages = run(&["demo", "accelerate", "brake", "compare"]);
    assert!(messages[0].starts_with("Dealership Ruta 40 - 2 vehicles"));
    assert_eq!(messages[1], "Car now at 35 km/h");
    assert_eq!(messages[2], "Truck now at 0 km/h");
    assert_eq!(messages[3], "Car is faster: 35 km/h");
}

#[test]
fn buttons_before_demo_are_refused() {
    let messages = run(&["compare", "accelerate", "demo", "compare"]);
    assert_eq!(messages[0], NO_SESSION_MESSAGE);
    assert_eq!(messages[1], NO_SESSION_MESSAGE);
    assert_eq!(messages[3], "Both vehicles are travelling at the same speed.");
}

#[test]
fn repeated_acceleration_accumulates() {
    let messages = run(&["demo", "accelerate", "accelerate", "accelerate"]);
    assert_eq!(messages[3], "Car now at 105 km/h");
}

#[test]
fn scenario_car_summary() {
    let session = create_demo_session().unwrap();
    let summary = session.car().borrow().describe();
    for needle in ["Toyota", "Corolla", "2020", "4 wheels", "Ivo Barbato", "Mendoza"] {
        assert!(summary.contains(needle), "{summary:?} missing {needle:?}");
    }
}

#[test]
fn session_vehicles_reject_foreign_parts() {
    let session = create_demo_session().unwrap();
    let mut truck = session.truck().borrow_mut();

    let err = truck.add_wheel(session.car()).unwrap_err();
    assert_eq!(err, DomainError::type_constraint("Wheel", "Car"));
    assert_eq!(truck.wheels().len(), 6);

    let err = truck
        .compare_speed(&ModelItem::from(Wheel::new("Michelin", "All-Season")))
        .unwrap_err();
    assert!(err.is_type_constraint());
}

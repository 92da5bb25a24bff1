//! `autolot-demo` — the interactive vehicle/dealership demo without a screen.
//!
//! Builds the fixed scenario and applies user actions (demo, accelerate, brake,
//! compare) to it, returning the message and state the presentation layer shows.

pub mod config;
pub mod controller;
pub mod session;

pub use config::DemoConfig;
pub use controller::{Action, Controller, NO_SESSION_MESSAGE, Response};
pub use session::{DemoSession, StateEntry, create_demo_session};

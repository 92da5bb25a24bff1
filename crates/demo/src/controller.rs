//! Maps user actions onto the demo session.

use core::fmt;
use core::str::FromStr;

use autolot_core::{DomainError, DomainResult};
use autolot_vehicles::ModelItem;

use crate::config::DemoConfig;
use crate::session::{DemoSession, StateEntry, create_demo_session};

/// Message shown when an action needs a session that does not exist yet.
pub const NO_SESSION_MESSAGE: &str = "Create the demo first.";

/// A user action (one button of the demo screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Demo,
    Accelerate,
    Brake,
    Compare,
}

impl Action {
    /// The sequence run when no actions are requested.
    pub const DEFAULT_SCRIPT: [Action; 4] = [
        Action::Demo,
        Action::Accelerate,
        Action::Brake,
        Action::Compare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Demo => "demo",
            Action::Accelerate => "accelerate",
            Action::Brake => "brake",
            Action::Compare => "compare",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Action::Demo),
            "accelerate" => Ok(Action::Accelerate),
            "brake" => Ok(Action::Brake),
            "compare" => Ok(Action::Compare),
            other => Err(DomainError::validation(format!("unknown action: {other}"))),
        }
    }
}

/// What the presentation layer should show after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub message: String,
    pub state: Vec<StateEntry>,
}

impl Response {
    fn without_session(action: Action) -> Self {
        tracing::warn!(%action, "no demo session yet");
        Self {
            message: NO_SESSION_MESSAGE.to_string(),
            state: Vec::new(),
        }
    }
}

/// Holds the (optional) current session and applies actions to it.
#[derive(Debug)]
pub struct Controller {
    config: DemoConfig,
    session: Option<DemoSession>,
}

impl Controller {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&DemoSession> {
        self.session.as_ref()
    }

    pub fn dispatch(&mut self, action: Action) -> DomainResult<Response> {
        tracing::debug!(%action, "dispatching");

        match action {
            Action::Demo => {
                let session = self.session.insert(create_demo_session()?);
                let message = session.dealership().report().join("\n");
                Ok(respond(session, message))
            }
            Action::Accelerate => {
                let Some(session) = &self.session else {
                    return Ok(Response::without_session(action));
                };
                let speed = session.car().borrow_mut().accelerate(self.config.accelerate_delta);
                Ok(respond(session, format!("Car now at {speed} km/h")))
            }
            Action::Brake => {
                let Some(session) = &self.session else {
                    return Ok(Response::without_session(action));
                };
                let speed = session.truck().borrow_mut().brake(self.config.brake_delta);
                Ok(respond(session, format!("Truck now at {speed} km/h")))
            }
            Action::Compare => {
                let Some(session) = &self.session else {
                    return Ok(Response::without_session(action));
                };
                let message = session
                    .car()
                    .borrow()
                    .compare_speed(&ModelItem::from(session.truck()))?;
                Ok(respond(session, message))
            }
        }
    }
}

fn respond(session: &DemoSession, message: String) -> Response {
    let state = session.state();
    log_state(&state);
    Response { message, state }
}

fn log_state(state: &[StateEntry]) {
    match serde_json::to_string(state) {
        Ok(json) => tracing::info!(state = %json, "state updated"),
        Err(error) => tracing::warn!(%error, "could not encode state"),
    }
}

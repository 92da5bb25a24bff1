//! Value components fitted to vehicles.

use core::fmt;

use serde::{Deserialize, Serialize};

use autolot_core::ValueObject;

/// Default operating temperature of a refrigeration unit, in °C.
pub const DEFAULT_REFRIGERATION_TEMPERATURE_C: i32 = -18;

/// A single wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wheel {
    brand: String,
    tread: String,
}

impl Wheel {
    pub fn new(brand: impl Into<String>, tread: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            tread: tread.into(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn tread(&self) -> &str {
        &self.tread
    }
}

impl ValueObject for Wheel {}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wheel {} ({})", self.brand, self.tread)
    }
}

/// Truck engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    kind: String,
    horsepower: u32,
    description: String,
}

impl Engine {
    pub fn new(kind: impl Into<String>, horsepower: u32) -> Self {
        Self {
            kind: kind.into(),
            horsepower,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn horsepower(&self) -> u32 {
        self.horsepower
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl ValueObject for Engine {}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} · {} HP", self.kind, self.horsepower)?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}

/// Trailer hitched to a truck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    length_m: f64,
}

impl Trailer {
    pub fn new(length_m: f64) -> Self {
        Self { length_m }
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }
}

impl ValueObject for Trailer {}

impl fmt::Display for Trailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trailer {} m", self.length_m)
    }
}

/// Refrigeration unit for cold-chain cargo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefrigerationUnit {
    temperature_c: i32,
}

impl RefrigerationUnit {
    pub fn new(temperature_c: i32) -> Self {
        Self { temperature_c }
    }

    pub fn temperature_c(&self) -> i32 {
        self.temperature_c
    }
}

impl Default for RefrigerationUnit {
    fn default() -> Self {
        Self::new(DEFAULT_REFRIGERATION_TEMPERATURE_C)
    }
}

impl ValueObject for RefrigerationUnit {}

impl fmt::Display for RefrigerationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Refrigeration unit {}°C", self.temperature_c)
    }
}

//! Ownership documents: registration authorities and titles.

use core::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use autolot_core::{DomainError, DomainResult, ValueObject};

/// Provincial registry that issues titles.
///
/// Shared read-only between every title it issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationAuthority {
    province: String,
}

impl RegistrationAuthority {
    pub fn new(province: impl Into<String>) -> Self {
        Self {
            province: province.into(),
        }
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl ValueObject for RegistrationAuthority {}

impl fmt::Display for RegistrationAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Registry · Province: {}", self.province)
    }
}

/// Title (proof of ownership) attached to exactly one vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    owner: String,
    authority: Option<Rc<RegistrationAuthority>>,
}

impl Title {
    /// Issue a title. The owner name must not be blank.
    pub fn new(
        owner: impl Into<String>,
        authority: Option<Rc<RegistrationAuthority>>,
    ) -> DomainResult<Self> {
        let owner = owner.into();
        if owner.trim().is_empty() {
            return Err(DomainError::validation("title owner cannot be empty"));
        }
        Ok(Self { owner, authority })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn authority(&self) -> Option<&RegistrationAuthority> {
        self.authority.as_deref()
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title held by {} · ", self.owner)?;
        match &self.authority {
            Some(authority) => write!(f, "{authority}"),
            None => f.write_str("Registry N/A"),
        }
    }
}

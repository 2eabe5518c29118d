//! Job advertisement value objects and their validation.
//!
//! An ad is a [`Packet`] wrapping a [`Publication`] window and a [`Position`], which in
//! turn owns the company, schedule, salary, qualifications, and application method.
//! Each value object validates only its own fields; [`validate_packet`] walks them in
//! a fixed order and flattens the results.

mod aggregate;
pub mod domain;
pub mod example;
mod rules;
pub mod validation;

pub use aggregate::{collect_errors, validate_packet, AdValidationReport};
pub use domain::{
    Address, ApplicationMethod, Company, Packet, Position, Publication, Qualification, Salary,
    SalaryType, Schedule, Terms,
};
pub use example::{example_packet, ExampleDateError};
pub use validation::{ErrorCode, Validate, ValidationError};

/// Raised when a supplied ad cannot be decoded into a [`Packet`].
#[derive(Debug, thiserror::Error)]
pub enum AdPayloadError {
    #[error("ad payload is not a valid packet: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a JSON packet.
pub fn parse_packet(raw: &[u8]) -> Result<Packet, AdPayloadError> {
    Ok(serde_json::from_slice(raw)?)
}

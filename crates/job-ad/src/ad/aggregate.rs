use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::Packet;
use super::validation::{Validate, ValidationError};

/// Flattened validation result for a whole ad.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdValidationReport {
    pub errors: Vec<ValidationError>,
}

impl AdValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate each object in order and concatenate the non-empty results.
///
/// Output order follows input order; duplicates are kept.
pub fn collect_errors<'a, I>(objects: I) -> Vec<ValidationError>
where
    I: IntoIterator<Item = &'a dyn Validate>,
{
    objects
        .into_iter()
        .map(|object| {
            let errors = object.validate();
            debug!(
                object = object.object_name(),
                error_count = errors.len(),
                "validated ad object"
            );
            errors
        })
        .filter(|errors| !errors.is_empty())
        .flatten()
        .collect()
}

impl Packet {
    /// Every value object in the ad: company, publication, schedule, salary,
    /// each qualification, application method, position, then the packet itself.
    pub fn validatables(&self) -> Vec<&dyn Validate> {
        let position = &self.position;
        let mut objects: Vec<&dyn Validate> = vec![
            &position.company as &dyn Validate,
            &self.publication as &dyn Validate,
            &position.schedule as &dyn Validate,
            &position.salary as &dyn Validate,
        ];
        objects.extend(
            position
                .qualifications
                .iter()
                .map(|qualification| qualification as &dyn Validate),
        );
        objects.push(&position.application_method);
        objects.push(position);
        objects.push(self);
        objects
    }
}

pub fn validate_packet(packet: &Packet) -> AdValidationReport {
    AdValidationReport {
        errors: collect_errors(packet.validatables()),
    }
}

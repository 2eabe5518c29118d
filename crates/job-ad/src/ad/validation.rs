use serde::{Deserialize, Serialize};

use super::domain::{
    Address, ApplicationMethod, Company, Packet, Position, Publication, Qualification, Salary,
    Schedule,
};
use super::rules;

/// Category of a field-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Required,
    InvalidFormat,
    OutOfRange,
    Ordering,
}

/// Describes one field-level validation failure on one value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{object}.{field} {message}")]
pub struct ValidationError {
    pub object: String,
    pub field: String,
    pub code: ErrorCode,
    pub message: String,
}

/// Implemented by every value object in an ad.
///
/// Validators only inspect the object's own fields. Nested value objects are
/// validated separately by the aggregator.
pub trait Validate {
    /// Name reported as `object` in each descriptor.
    fn object_name(&self) -> &'static str;

    fn validate(&self) -> Vec<ValidationError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Accumulates descriptors for a single object.
pub(crate) struct FieldChecks {
    object: &'static str,
    errors: Vec<ValidationError>,
}

impl FieldChecks {
    pub(crate) fn new(object: &'static str) -> Self {
        Self {
            object,
            errors: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, field: &str, code: ErrorCode, message: impl Into<String>) {
        self.errors.push(ValidationError {
            object: self.object.to_string(),
            field: field.to_string(),
            code,
            message: message.into(),
        });
    }

    pub(crate) fn required(&mut self, field: &str, value: &str) -> bool {
        if rules::is_blank(value) {
            self.push(field, ErrorCode::Required, "must be filled");
            false
        } else {
            true
        }
    }

    /// Required field that must also satisfy `predicate`.
    pub(crate) fn formatted(
        &mut self,
        field: &str,
        value: &str,
        predicate: fn(&str) -> bool,
        message: &str,
    ) {
        if self.required(field, value) && !predicate(value) {
            self.push(field, ErrorCode::InvalidFormat, message);
        }
    }

    /// Optional field checked only when present and non-blank.
    pub(crate) fn optional(
        &mut self,
        field: &str,
        value: Option<&str>,
        predicate: fn(&str) -> bool,
        message: &str,
    ) {
        if let Some(value) = value.filter(|value| !rules::is_blank(value)) {
            if !predicate(value) {
                self.push(field, ErrorCode::InvalidFormat, message);
            }
        }
    }

    pub(crate) fn address(&mut self, prefix: &str, address: &Address) {
        self.formatted(
            &format!("{prefix}.country_code"),
            &address.country_code,
            rules::is_numeric_code,
            "must be a numeric country code",
        );
        self.formatted(
            &format!("{prefix}.zip"),
            &address.zip,
            rules::is_zip,
            "must be a five digit postal code",
        );
        self.required(&format!("{prefix}.municipality"), &address.municipality);
        self.required(&format!("{prefix}.street"), &address.street);
        self.required(&format!("{prefix}.city"), &address.city);
    }

    pub(crate) fn finish(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl Validate for Company {
    fn object_name(&self) -> &'static str {
        "company"
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut checks = FieldChecks::new(self.object_name());
        checks.required("name", &self.name);
        checks.formatted(
            "organisation_number",
            &self.organisation_number,
            rules::is_organisation_number,
            "must be a ten digit organisation number",
        );
        checks.required("description", &self.description);
        checks.optional(
            "website",
            self.website.as_deref(),
            rules::is_http_url,
            "must be an http(s) URL",
        );
        checks.address("address", &self.address);
        checks.finish()
    }
}

impl Validate for Publication {
    fn object_name(&self) -> &'static str {
        "publication"
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut checks = FieldChecks::new(self.object_name());
        checks.required("contact_name", &self.contact_name);
        checks.formatted(
            "contact_email",
            &self.contact_email,
            rules::is_email,
            "must be a valid email address",
        );
        if let Some(unpublish_on) = self.unpublish_on {
            if unpublish_on <= self.publish_on {
                checks.push(
                    "unpublish_on",
                    ErrorCode::Ordering,
                    format!("must be after publish date {}", self.publish_on),
                );
            }
        }
        checks.finish()
    }
}

impl Validate for Schedule {
    fn object_name(&self) -> &'static str {
        "schedule"
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut checks = FieldChecks::new(self.object_name());
        checks.required("summary", &self.summary);
        if let Some(end_on) = self.end_on {
            if end_on < self.start_on {
                checks.push(
                    "end_on",
                    ErrorCode::Ordering,
                    format!("must not precede start date {}", self.start_on),
                );
            }
        }
        checks.finish()
    }
}

impl Validate for Salary {
    fn object_name(&self) -> &'static str {
        "salary"
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut checks = FieldChecks::new(self.object_name());
        checks.formatted(
            "currency",
            &self.currency,
            rules::is_currency_code,
            "must be a three letter currency code",
        );
        checks.required("summary", &self.summary);
        checks.finish()
    }
}

impl Validate for Qualification {
    fn object_name(&self) -> &'static str {
        "qualification"
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut checks = FieldChecks::new(self.object_name());
        checks.required("summary", &self.summary);
        if let Some(licence) = self
            .drivers_license
            .as_deref()
            .filter(|licence| !rules::is_blank(licence))
        {
            if let Some(unknown) = rules::unknown_licence_class(licence) {
                checks.push(
                    "drivers_license",
                    ErrorCode::InvalidFormat,
                    format!("contains unknown licence class '{unknown}'"),
                );
            }
        }
        checks.finish()
    }
}

impl Validate for ApplicationMethod {
    fn object_name(&self) -> &'static str {
        "application_method"
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut checks = FieldChecks::new(self.object_name());
        checks.required("summary", &self.summary);
        match self.url.as_deref() {
            Some(url) if !rules::is_blank(url) => {
                if !rules::is_http_url(url) {
                    checks.push("url", ErrorCode::InvalidFormat, "must be an http(s) URL");
                }
            }
            _ if self.external => {
                checks.push(
                    "url",
                    ErrorCode::Required,
                    "must be filled for external applications",
                );
            }
            _ => {}
        }
        checks.optional(
            "email",
            self.email.as_deref(),
            rules::is_email,
            "must be a valid email address",
        );
        checks.finish()
    }
}

impl Validate for Position {
    fn object_name(&self) -> &'static str {
        "position"
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut checks = FieldChecks::new(self.object_name());
        checks.required("title", &self.title);
        checks.required("purpose", &self.purpose);
        checks.address("address", &self.address);
        if !rules::DURATION_IDS.contains(&self.terms.duration_id) {
            checks.push(
                "terms.duration_id",
                ErrorCode::OutOfRange,
                format!(
                    "must be between {} and {}",
                    rules::DURATION_IDS.start(),
                    rules::DURATION_IDS.end()
                ),
            );
        }
        if !rules::EMPLOYMENT_IDS.contains(&self.terms.employment_id) {
            checks.push(
                "terms.employment_id",
                ErrorCode::OutOfRange,
                format!(
                    "must be between {} and {}",
                    rules::EMPLOYMENT_IDS.start(),
                    rules::EMPLOYMENT_IDS.end()
                ),
            );
        }
        checks.finish()
    }
}

impl Validate for Packet {
    fn object_name(&self) -> &'static str {
        "packet"
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut checks = FieldChecks::new(self.object_name());
        checks.required("customer_id", &self.customer_id);
        checks.formatted(
            "sender_email",
            &self.sender_email,
            rules::is_email,
            "must be a valid email address",
        );
        checks.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ad::example::example_packet;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
    }

    fn fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|error| error.field.as_str()).collect()
    }

    #[test]
    fn blank_company_fields_are_required() {
        let mut company = example_packet(today()).expect("example builds").position.company;
        company.name = "  ".to_string();
        company.address.zip = String::new();

        let errors = company.validate();
        assert_eq!(fields(&errors), vec!["name", "address.zip"]);
        assert!(errors
            .iter()
            .all(|error| error.code == ErrorCode::Required && error.object == "company"));
    }

    #[test]
    fn malformed_organisation_number_is_a_format_error() {
        let mut company = example_packet(today()).expect("example builds").position.company;
        company.organisation_number = "12-34".to_string();

        let errors = company.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::InvalidFormat);
        assert_eq!(
            errors[0].to_string(),
            "company.organisation_number must be a ten digit organisation number"
        );
    }

    #[test]
    fn publication_window_must_move_forward() {
        let mut publication = example_packet(today()).expect("example builds").publication;
        publication.unpublish_on = Some(publication.publish_on);

        let errors = publication.validate();
        assert_eq!(fields(&errors), vec!["unpublish_on"]);
        assert_eq!(errors[0].code, ErrorCode::Ordering);
    }

    #[test]
    fn schedule_end_may_equal_start_but_not_precede_it() {
        let mut schedule = example_packet(today()).expect("example builds").position.schedule;
        schedule.end_on = Some(schedule.start_on);
        assert!(schedule.is_valid());

        schedule.end_on = Some(schedule.start_on - Duration::days(1));
        assert_eq!(fields(&schedule.validate()), vec!["end_on"]);
    }

    #[test]
    fn external_application_needs_a_url() {
        let mut method = example_packet(today()).expect("example builds").position.application_method;
        method.url = None;
        let errors = method.validate();
        assert_eq!(fields(&errors), vec!["url"]);
        assert_eq!(errors[0].code, ErrorCode::Required);

        method.external = false;
        assert!(method.is_valid());
    }

    #[test]
    fn qualification_rejects_unknown_licence_class() {
        let mut qualification = example_packet(today())
            .expect("example builds")
            .position
            .qualifications[0]
            .clone();
        qualification.drivers_license = Some("B,Q".to_string());

        let errors = qualification.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("'Q'"));
    }

    #[test]
    fn blank_licence_is_treated_as_absent() {
        let mut qualification = example_packet(today())
            .expect("example builds")
            .position
            .qualifications[0]
            .clone();
        qualification.drivers_license = Some(String::new());
        assert!(qualification.is_valid());

        qualification.drivers_license = Some("  ".to_string());
        assert!(qualification.is_valid());

        qualification.drivers_license = Some("B,".to_string());
        assert!(qualification.is_valid());

        let mut company = example_packet(today()).expect("example builds").position.company;
        company.website = Some(String::new());
        assert!(company.is_valid());
    }

    #[test]
    fn publication_reports_required_fields_before_ordering() {
        let mut publication = example_packet(today()).expect("example builds").publication;
        publication.contact_name.clear();
        publication.unpublish_on = Some(publication.publish_on - Duration::days(1));

        let errors = publication.validate();
        assert_eq!(fields(&errors), vec!["contact_name", "unpublish_on"]);
    }

    #[test]
    fn position_terms_must_be_known_codes() {
        let mut position = example_packet(today()).expect("example builds").position;
        position.terms.duration_id = 0;
        position.terms.employment_id = 9;

        let errors = position.validate();
        assert_eq!(
            fields(&errors),
            vec!["terms.duration_id", "terms.employment_id"]
        );
        assert!(errors.iter().all(|error| error.code == ErrorCode::OutOfRange));
    }

    #[test]
    fn position_does_not_report_nested_objects() {
        let mut position = example_packet(today()).expect("example builds").position;
        position.company.name.clear();
        position.salary.summary.clear();

        assert!(position.is_valid());
    }

    #[test]
    fn descriptor_serializes_with_snake_case_code() {
        let mut packet = example_packet(today()).expect("example builds");
        packet.customer_id.clear();

        let value = serde_json::to_value(&packet.validate()[0]).expect("serializes");
        assert_eq!(value["object"], "packet");
        assert_eq!(value["field"], "customer_id");
        assert_eq!(value["code"], "required");
        assert_eq!(value["message"], "must be filled");
    }
}

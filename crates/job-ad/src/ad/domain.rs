use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Postal address shared by the employer and the workplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub country_code: String,
    pub zip: String,
    pub municipality: String,
    pub street: String,
    pub city: String,
}

/// Employer placing the advertisement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub organisation_number: String,
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    pub address: Address,
}

/// Publication window and the contact responsible for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub publish_on: NaiveDate,
    #[serde(default)]
    pub unpublish_on: Option<NaiveDate>,
    pub contact_name: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub full_time: bool,
    pub summary: String,
    pub start_on: NaiveDate,
    #[serde(default)]
    pub end_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    Fixed,
    FixedAndCommission,
    Commission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub salary_type: SalaryType,
    pub currency: String,
    pub summary: String,
}

/// One requirement or merit listed for the position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub summary: String,
    pub required: bool,
    pub experience: bool,
    /// Comma separated licence classes (e.g. `B,C1`).
    #[serde(default)]
    pub drivers_license: Option<String>,
    pub car: bool,
}

/// How candidates apply. External methods point at the employer's own page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationMethod {
    pub external: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub summary: String,
}

/// Employment terms expressed as numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terms {
    pub duration_id: u8,
    pub employment_id: u8,
}

/// The advertised position and everything it is composed of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    pub purpose: String,
    pub address: Address,
    pub terms: Terms,
    pub company: Company,
    pub schedule: Schedule,
    pub salary: Salary,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
    pub application_method: ApplicationMethod,
}

/// Envelope handed to the job board: who sends it, when it runs, and what it advertises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    pub customer_id: String,
    pub sender_email: String,
    pub publication: Publication,
    pub position: Position,
}

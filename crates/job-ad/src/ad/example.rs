use chrono::{Days, NaiveDate};

use super::domain::{
    Address, ApplicationMethod, Company, Packet, Position, Publication, Qualification, Salary,
    SalaryType, Schedule, Terms,
};

fn office_address() -> Address {
    Address {
        country_code: "199".to_string(),
        zip: "11356".to_string(),
        municipality: "0180".to_string(),
        street: "Birger Jarlsgatan 57".to_string(),
        city: "Stockholm".to_string(),
    }
}

/// Raised when the example's unpublish or start date would overflow the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("publish date {0} leaves no room for the example ad's schedule")]
pub struct ExampleDateError(pub NaiveDate);

fn days_after(today: NaiveDate, days: u64) -> Result<NaiveDate, ExampleDateError> {
    today
        .checked_add_days(Days::new(days))
        .ok_or(ExampleDateError(today))
}

/// Hard-coded demonstration ad published on `today`. Valid by construction.
pub fn example_packet(today: NaiveDate) -> Result<Packet, ExampleDateError> {
    let company = Company {
        name: "ACME AB".to_string(),
        organisation_number: "556677-8899".to_string(),
        description: "ACME builds tools for people who build things.".to_string(),
        website: Some("https://acme.example.com".to_string()),
        address: office_address(),
    };

    let publication = Publication {
        publish_on: today,
        unpublish_on: Some(days_after(today, 30)?),
        contact_name: "John Doe".to_string(),
        contact_email: "john@example.com".to_string(),
    };

    let schedule = Schedule {
        full_time: true,
        summary: "Full time, weekdays 9-17".to_string(),
        start_on: days_after(today, 45)?,
        end_on: None,
    };

    let salary = Salary {
        salary_type: SalaryType::Fixed,
        currency: "SEK".to_string(),
        summary: "Fixed monthly salary according to agreement.".to_string(),
    };

    let qualifications = vec![
        Qualification {
            summary: "At least three years of backend development.".to_string(),
            required: true,
            experience: true,
            drivers_license: Some("B".to_string()),
            car: false,
        },
        Qualification {
            summary: "Familiarity with the Stockholm public transport network.".to_string(),
            required: false,
            experience: false,
            drivers_license: None,
            car: false,
        },
    ];

    let application_method = ApplicationMethod {
        external: true,
        url: Some("https://acme.example.com/careers".to_string()),
        email: Some("jobs@example.com".to_string()),
        summary: "Apply through our careers page.".to_string(),
    };

    let position = Position {
        title: "Backend Developer".to_string(),
        purpose: "Build and run the services behind our ad platform.".to_string(),
        address: office_address(),
        terms: Terms {
            duration_id: 1,
            employment_id: 1,
        },
        company,
        schedule,
        salary,
        qualifications,
        application_method,
    };

    Ok(Packet {
        customer_id: "ACME-0001".to_string(),
        sender_email: "john@example.com".to_string(),
        publication,
        position,
    })
}

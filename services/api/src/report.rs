use chrono::{Local, NaiveDate};
use clap::Args;
use job_ad::ad::{example_packet, parse_packet, validate_packet, AdValidationReport};
use job_ad::error::AppError;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct ValidateArgs {
    /// JSON packet to validate instead of the bundled example ad
    #[arg(long)]
    pub(crate) ad: Option<PathBuf>,
    /// Publish date for the example ad (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let ValidateArgs { ad, today } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let report = build_report(ad.as_deref(), today)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn build_report(
    ad: Option<&Path>,
    today: NaiveDate,
) -> Result<AdValidationReport, AppError> {
    let packet = match ad {
        Some(path) => parse_packet(&std::fs::read(path)?)?,
        None => example_packet(today)?,
    };

    Ok(validate_packet(&packet))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
    }

    #[test]
    fn example_report_has_no_errors() {
        let report = build_report(None, today()).expect("report builds");
        assert!(report.is_valid());
    }

    #[test]
    fn packet_file_is_validated() {
        let mut packet = example_packet(today()).expect("example builds");
        packet.customer_id.clear();

        let path = std::env::temp_dir().join(format!("job-ad-report-{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_vec(&packet).expect("serializes")).expect("writes");

        let report = build_report(Some(&path), today());
        std::fs::remove_file(&path).ok();

        let report = report.expect("report builds");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "customer_id");
    }

    #[test]
    fn publish_date_without_room_for_schedule_is_an_error() {
        let today = NaiveDate::MAX;
        match build_report(None, today) {
            Err(AppError::Example(err)) => assert_eq!(err.0, today),
            other => panic!("expected example date error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("/nonexistent/job-ad/packet.json");
        match build_report(Some(path), today()) {
            Err(AppError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}

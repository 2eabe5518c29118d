//! Field-level predicates used by the per-object validators.

/// Driving licence classes accepted in a qualification.
pub(crate) const LICENCE_CLASSES: &[&str] = &[
    "AM", "A1", "A2", "A", "B", "BE", "C1", "C1E", "C", "CE", "D1", "D1E", "D", "DE",
];

pub(crate) const DURATION_IDS: std::ops::RangeInclusive<u8> = 1..=9;
pub(crate) const EMPLOYMENT_IDS: std::ops::RangeInclusive<u8> = 1..=4;

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn is_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

pub(crate) fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));

    let Some(rest) = rest else {
        return false;
    };
    if rest.chars().any(char::is_whitespace) {
        return false;
    }

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    host == "localhost" || (host.contains('.') && host.split('.').all(|label| !label.is_empty()))
}

/// Ten digits, optionally written `NNNNNN-NNNN`.
pub(crate) fn is_organisation_number(value: &str) -> bool {
    let value = value.trim();
    let digits: String = match value.split_once('-') {
        Some((head, tail)) if head.len() == 6 => format!("{head}{tail}"),
        Some(_) => return false,
        None => value.to_string(),
    };

    digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit())
}

/// Five digits, optionally written `NNN NN`.
pub(crate) fn is_zip(value: &str) -> bool {
    let value = value.trim();
    let digits: String = match value.split_once(' ') {
        Some((head, tail)) if head.len() == 3 => format!("{head}{tail}"),
        Some(_) => return false,
        None => value.to_string(),
    };

    digits.len() == 5 && digits.chars().all(|c| c.is_ascii_digit())
}

pub(crate) fn is_numeric_code(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

pub(crate) fn is_currency_code(value: &str) -> bool {
    let value = value.trim();
    value.len() == 3 && value.chars().all(|c| c.is_ascii_uppercase())
}

/// Returns the first licence class that is not recognised, if any. Empty segments are skipped.
pub(crate) fn unknown_licence_class(value: &str) -> Option<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .find(|class| !LICENCE_CLASSES.contains(class))
}

//! Per-field format validators.
//!
//! Every validator accepts an empty value; required-ness is checked
//! separately so that format and presence errors stay distinct.

use crate::constants::template_types;
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

pub type FieldResult = std::result::Result<(), String>;

const FORBIDDEN_PATH_CHARS: &[char] = &['<', '>', ':', '"', '\\', '|', '?', '*'];

static FORM_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d{1,2}[A-Z]?-[\dA-Z]+$").expect("form number pattern is valid")
});

static OMB_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{4}$").expect("OMB number pattern is valid"));

static MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0?[1-9]|1[0-2])/(0?[1-9]|[12]\d|3[01])/(\d{4})$")
        .expect("date pattern is valid")
});

static STRICT_SLACK_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[a-z-]+$").expect("slack group pattern is valid"));

pub fn validate_root_url(url: &str) -> FieldResult {
    if url.is_empty() {
        return Ok(());
    }
    if !url.starts_with('/') {
        return Err(
            r#"Root URL must start with a forward slash (/). Example: "/burial-allowance""#
                .to_string(),
        );
    }
    if url.ends_with('/') {
        return Err(r#"Root URL should not end with a slash (/). Example: "/burial-allowance" not "/burial-allowance/""#.to_string());
    }
    if url.chars().any(|c| FORBIDDEN_PATH_CHARS.contains(&c) || c.is_whitespace()) {
        return Err(r#"Root URL contains invalid characters. Use only letters, numbers, hyphens, and forward slashes. Example: "/burial-allowance" not "/burial allowance""#.to_string());
    }
    Ok(())
}

pub fn validate_app_name(name: &str) -> FieldResult {
    if name.chars().any(|c| FORBIDDEN_PATH_CHARS.contains(&c)) {
        return Err(r#"App name contains invalid characters. Avoid: < > : " \ | ? *. Example: "Burial Allowance Application""#.to_string());
    }
    Ok(())
}

/// Strict variant: kebab-friendly characters only.
pub fn validate_entry_name(entry: &str) -> FieldResult {
    if entry.chars().any(char::is_whitespace) {
        return Err(r#"Entry name should not contain spaces. Use kebab-case. Example: "burial-allowance" not "burial allowance""#.to_string());
    }
    if entry.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '-')) {
        return Err(
            r#"Entry name should only contain letters, numbers, and hyphens. Example: "burial-allowance""#
                .to_string(),
        );
    }
    Ok(())
}

/// Prompt variant: only spaces are rejected.
pub fn validate_entry_name_spaces(entry: &str) -> FieldResult {
    if entry.contains(' ') {
        return Err("Bundle names should not include spaces".to_string());
    }
    Ok(())
}

pub fn validate_folder_name(folder: &str) -> FieldResult {
    if folder.contains(' ') {
        return Err("Folder names should not include spaces".to_string());
    }
    Ok(())
}

/// One or two digits, an optional letter, a dash, then letters or digits.
pub fn validate_form_number(number: &str) -> FieldResult {
    if number.is_empty() || FORM_NUMBER.is_match(number) {
        return Ok(());
    }
    Err(r#"Form number should follow VA format (e.g., "22-0993", "21-526EZ", "10-10EZ")"#.to_string())
}

pub fn validate_omb_number(number: &str) -> FieldResult {
    if number.is_empty() || OMB_NUMBER.is_match(number) {
        return Ok(());
    }
    Err(r#"OMB number should follow format XXXX-XXXX (e.g., "2900-0001")"#.to_string())
}

pub fn validate_expiration_date(date: &str) -> FieldResult {
    validate_expiration_date_on(date, Local::now().date_naive())
}

/// Same as [`validate_expiration_date`] with an explicit notion of today.
pub fn validate_expiration_date_on(date: &str, today: NaiveDate) -> FieldResult {
    if date.is_empty() {
        return Ok(());
    }
    let Some(parsed) = parse_month_day_year(date) else {
        return Err(r#"Expiration date should follow M/D/YYYY format. Examples: "12/31/2025" or "3/15/2026""#.to_string());
    };
    if parsed <= today {
        return Err(r#"Expiration date should be in the future. Example: "12/31/2026""#.to_string());
    }
    Ok(())
}

/// Parses `M/D/YYYY` with one or two digit month and day.
///
/// The pattern bounds month and day; `chrono` rejects days the month lacks.
pub fn parse_month_day_year(date: &str) -> Option<NaiveDate> {
    let caps = MONTH_DAY_YEAR.captures(date)?;
    let month = caps[1].parse().ok()?;
    let day = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn validate_respondent_burden(minutes: &str) -> FieldResult {
    if minutes.is_empty() {
        return Ok(());
    }
    match minutes.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(()),
        _ => Err(r#"Respondent burden should be a positive number (minutes). Example: "15" or "30""#.to_string()),
    }
}

pub fn validate_template_type(template_type: &str) -> FieldResult {
    if template_type.is_empty() || template_types::ALL.contains(&template_type) {
        return Ok(());
    }
    Err(format!(
        r#"Template type should be one of: {}. Example: "{}""#,
        template_types::ALL.join(", "),
        template_types::WITH_1_PAGE
    ))
}

/// Lenient variant: `none` or any handle starting with `@`.
pub fn validate_slack_group(group: &str) -> FieldResult {
    if group.is_empty() || group == "none" || group.starts_with('@') {
        return Ok(());
    }
    Err(r#"Slack group should be "none" or start with @. Example: "@my-team""#.to_string())
}

/// Strict variant used by prompts: `@` followed by lowercase letters and hyphens.
pub fn validate_slack_group_strict(group: &str) -> FieldResult {
    if group == "none" {
        return Ok(());
    }
    if STRICT_SLACK_GROUP.is_match(group) {
        Ok(())
    } else {
        Err("Slack group must start with @ and contain only lowercase letters and hyphens".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn root_url_rules() {
        assert!(validate_root_url("/burial-allowance").is_ok());
        assert!(validate_root_url("/a/b").is_ok());
        assert!(validate_root_url("").is_ok());
        assert!(validate_root_url("burial").unwrap_err().contains("must start"));
        assert!(validate_root_url("/burial/").unwrap_err().contains("should not end"));
        assert!(validate_root_url("/burial allowance").unwrap_err().contains("invalid characters"));
        assert!(validate_root_url("/a?b").is_err());
    }

    #[test]
    fn bare_slash_is_not_a_root_url() {
        assert!(validate_root_url("/").unwrap_err().contains("should not end"));
    }

    #[test]
    fn app_name_allows_spaces() {
        assert!(validate_app_name("Burial Allowance Application").is_ok());
        assert!(validate_app_name("Bad: Name").is_err());
        assert!(validate_app_name("a|b").is_err());
    }

    #[test]
    fn entry_name_variants() {
        assert!(validate_entry_name("burial-allowance").is_ok());
        assert!(validate_entry_name("burial allowance").unwrap_err().contains("spaces"));
        assert!(validate_entry_name("burial_allowance").unwrap_err().contains("only contain"));
        assert!(validate_entry_name_spaces("burial_allowance").is_ok());
        assert!(validate_entry_name_spaces("a b").is_err());
        assert!(validate_folder_name("a b").is_err());
        assert!(validate_folder_name("a/b").is_ok());
    }

    #[test]
    fn form_numbers_follow_va_style() {
        for ok in ["21-526EZ", "22-1990", "10-10EZ", "1-2345A", "22-0993", "21p-530", "22-1990e"] {
            assert!(validate_form_number(ok).is_ok(), "{ok} should be valid");
        }
        for bad in ["526EZ", "123-45", "21-", "-10", "21AB-1", "21-5 26"] {
            assert!(validate_form_number(bad).is_err(), "{bad} should be invalid");
        }
    }

    #[test]
    fn omb_number_shape() {
        assert!(validate_omb_number("2900-0001").is_ok());
        assert!(validate_omb_number("290-0001").is_err());
        assert!(validate_omb_number("2900-00a1").is_err());
        assert!(validate_omb_number("29000001").is_err());
        assert!(validate_omb_number("2900-00011").is_err());
    }

    #[test]
    fn expiration_date_must_be_strictly_future() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap();

        assert!(validate_expiration_date_on("3/15/2026", today)
            .unwrap_err()
            .contains("in the future"));
        assert!(validate_expiration_date_on(&tomorrow.format("%-m/%-d/%Y").to_string(), today).is_ok());
        assert!(validate_expiration_date_on("03/16/2026", today).is_ok());
        assert!(validate_expiration_date_on("13/1/2030", today).unwrap_err().contains("M/D/YYYY"));
        assert!(validate_expiration_date_on("2030-01-01", today).is_err());
        assert!(validate_expiration_date_on("2/30/2030", today).is_err());
        assert!(validate_expiration_date_on("1/32/2030", today).is_err());
        assert!(validate_expiration_date_on("1/1/30", today).is_err());
    }

    #[test]
    fn dates_parse_with_short_or_padded_parts() {
        assert_eq!(parse_month_day_year("3/5/2030"), NaiveDate::from_ymd_opt(2030, 3, 5));
        assert_eq!(parse_month_day_year("03/05/2030"), NaiveDate::from_ymd_opt(2030, 3, 5));
        assert_eq!(parse_month_day_year("0/5/2030"), None);
        assert_eq!(parse_month_day_year("3/5/2030/1"), None);
    }

    #[test]
    fn respondent_burden_is_positive() {
        assert!(validate_respondent_burden("30").is_ok());
        assert!(validate_respondent_burden("0").is_err());
        assert!(validate_respondent_burden("-5").is_err());
        assert!(validate_respondent_burden("abc").is_err());
    }

    #[test]
    fn template_type_enumeration() {
        assert!(validate_template_type("WITH_4_PAGES").is_ok());
        assert!(validate_template_type("FORM_ENGINE").is_ok());
        assert!(validate_template_type("with_1_page").is_err());
    }

    #[test]
    fn slack_group_variants() {
        assert!(validate_slack_group("none").is_ok());
        assert!(validate_slack_group("@Team_1").is_ok());
        assert!(validate_slack_group("team").is_err());
        assert!(validate_slack_group_strict("@my-team").is_ok());
        assert!(validate_slack_group_strict("@Team_1").is_err());
        assert!(validate_slack_group_strict("@").is_err());
        assert!(validate_slack_group_strict("none").is_ok());
    }
}

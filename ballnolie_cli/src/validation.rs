use balldontlie_api::types::StatKind;
use chrono::NaiveDate;

use crate::error::CliError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_PER_PAGE: u32 = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit. An empty result is allowed.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, CliError> {
    if input.len() > max_len {
        return Err(CliError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    Ok(input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string())
}

/// Validate a player search string. Empty means "no filter".
pub fn validate_search(input: &str) -> Result<String, CliError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a season: exactly four ASCII digits, e.g. `2023`.
pub fn validate_season(input: &str) -> Result<u32, CliError> {
    let trimmed = input.trim();
    if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CliError::InvalidInput(format!(
            "season '{}' must be a four-digit year, e.g. 2023",
            input
        )));
    }
    trimmed
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("invalid season '{}'", input)))
}

/// Validate a `YYYY-MM-DD` date.
pub fn validate_date(input: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD",
            input
        ))
    })
}

/// Validate that a date range is not inverted.
pub fn validate_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), CliError> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(CliError::InvalidInput(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
    }
    Ok(())
}

/// Validate results per page (must be 1..=100).
pub fn validate_per_page(per_page: u32) -> Result<u32, CliError> {
    if !(1..=MAX_PER_PAGE).contains(&per_page) {
        return Err(CliError::InvalidInput(format!(
            "per-page must be between 1 and {}",
            MAX_PER_PAGE
        )));
    }
    Ok(per_page)
}

/// Validate a chart metric name such as `pts`, `reb` or `three-pointers`.
pub fn validate_stat_kind(input: &str) -> Result<StatKind, CliError> {
    input.trim().to_lowercase().parse().map_err(|_| {
        CliError::InvalidInput(format!(
            "unknown stat '{}'. Valid values: pts, reb, ast, blk, fg, fg3, ft, oreb, dreb",
            input
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_control_chars() {
        assert_eq!(sanitize_text("le\x07bron\n", 100).unwrap(), "lebron");
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_text("  james  ", 100).unwrap(), "james");
    }

    #[test]
    fn test_sanitize_keeps_inner_spaces() {
        assert_eq!(sanitize_text("de aaron", 100).unwrap(), "de aaron");
    }

    #[test]
    fn test_sanitize_rejects_too_long() {
        let long = "a".repeat(101);
        assert!(sanitize_text(&long, 100).is_err());
    }

    #[test]
    fn test_search_may_be_empty() {
        assert_eq!(validate_search("   ").unwrap(), "");
    }

    #[test]
    fn test_valid_season() {
        assert_eq!(validate_season("2023").unwrap(), 2023);
        assert_eq!(validate_season(" 1979 ").unwrap(), 1979);
    }

    #[test]
    fn test_invalid_seasons() {
        for input in ["", "23", "20234", "20a3", "-202", "２０２３"] {
            let err = validate_season(input).unwrap_err();
            assert!(
                matches!(err, CliError::InvalidInput(_)),
                "expected rejection for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_valid_date() {
        let date = validate_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_invalid_dates() {
        for input in ["2024-13-01", "2024/01/01", "01-15-2024", "yesterday", ""] {
            assert!(validate_date(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_date_range() {
        let jan = validate_date("2024-01-01").ok();
        let feb = validate_date("2024-02-01").ok();
        assert!(validate_date_range(jan, feb).is_ok());
        assert!(validate_date_range(jan, jan).is_ok());
        assert!(validate_date_range(feb, None).is_ok());
        assert!(validate_date_range(feb, jan).is_err());
    }

    #[test]
    fn test_per_page_bounds() {
        assert!(validate_per_page(0).is_err());
        assert_eq!(validate_per_page(1).unwrap(), 1);
        assert_eq!(validate_per_page(100).unwrap(), 100);
        assert!(validate_per_page(101).is_err());
    }

    #[test]
    fn test_stat_kind() {
        assert_eq!(validate_stat_kind("pts").unwrap(), StatKind::Points);
        assert_eq!(validate_stat_kind(" REB ").unwrap(), StatKind::Rebounds);
        assert_eq!(
            validate_stat_kind("three-pointers").unwrap(),
            StatKind::ThreePointers
        );
        assert!(validate_stat_kind("dunks").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = validate_per_page(0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: per-page must be between 1 and 100");
    }
}

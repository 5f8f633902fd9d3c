use chrono::NaiveDate;

/// Resolves the `date` query value. Missing or unparsable input silently
/// falls back to `today` instead of failing the request.
pub fn resolve_selected_date(param: Option<&str>, today: NaiveDate) -> NaiveDate {
    param
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .unwrap_or(today)
}

#[cfg(test)]
mod test {
    use super::resolve_selected_date;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    }

    #[test]
    fn test_valid_date_is_used() {
        assert_eq!(
            resolve_selected_date(Some("2025-09-15"), today()),
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
        );
    }

    #[test]
    fn test_missing_date_falls_back_to_today() {
        assert_eq!(resolve_selected_date(None, today()), today());
    }

    #[test]
    fn test_unparsable_date_falls_back_to_today() {
        assert_eq!(resolve_selected_date(Some("not-a-date"), today()), today());
        assert_eq!(resolve_selected_date(Some("15/09/2025"), today()), today());
    }
}

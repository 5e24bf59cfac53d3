use chrono::{DateTime, Utc};

use crate::error::{ChartError, ChartResult};

/// Formats a unix-millisecond timestamp as `"Jan 15"` or, with
/// `with_day_of_week`, `"Wed, Jan 15"`.
///
/// Dates are resolved in UTC with fixed English abbreviations; the day of
/// month is not zero-padded.
pub fn format_date(timestamp_ms: f64, with_day_of_week: bool) -> ChartResult<String> {
    let millis = timestamp_ms as i64;
    let date: DateTime<Utc> = DateTime::from_timestamp_millis(millis)
        .filter(|_| timestamp_ms.is_finite())
        .ok_or(ChartError::InvalidTimestamp(millis))?;

    let pattern = if with_day_of_week {
        "%a, %b %-d"
    } else {
        "%b %-d"
    };
    Ok(date.format(pattern).to_string())
}

#[cfg(test)]
mod tests {
    use super::format_date;

    // 2020-01-15T00:00:00Z
    const JAN_15_2020: f64 = 1_579_046_400_000.0;

    #[test]
    fn formats_with_and_without_weekday() {
        assert_eq!(format_date(JAN_15_2020, true).expect("date"), "Wed, Jan 15");
        assert_eq!(format_date(JAN_15_2020, false).expect("date"), "Jan 15");
    }

    #[test]
    fn day_of_month_is_not_padded() {
        // 2019-03-05T12:00:00Z
        assert_eq!(
            format_date(1_551_787_200_000.0, false).expect("date"),
            "Mar 5"
        );
    }

    #[test]
    fn non_finite_timestamp_is_rejected() {
        assert!(format_date(f64::NAN, true).is_err());
    }
}

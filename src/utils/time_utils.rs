use chrono::{Datelike, Local, NaiveDate};

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const AXIS_DATE_FORMAT: &str = "%m/%d";

    /// Calendar day in the user's local timezone.
    pub fn today_local() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Plot x coordinate for a date (whole days since 0001-01-01).
    pub fn date_to_plot_x(date: NaiveDate) -> f64 {
        date.num_days_from_ce() as f64
    }

    /// Inverse of `date_to_plot_x`; rounds to the nearest day.
    pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
        if !x.is_finite() || x < i32::MIN as f64 || x > i32::MAX as f64 {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(Self::STANDARD_DATE_FORMAT).to_string()
    }

    pub fn format_axis_date(date: NaiveDate) -> String {
        date.format(Self::AXIS_DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_x_round_trips_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let x = TimeUtils::date_to_plot_x(date);
        assert_eq!(TimeUtils::plot_x_to_date(x), Some(date));
        assert_eq!(TimeUtils::plot_x_to_date(x + 0.4), Some(date));
        assert_eq!(TimeUtils::date_to_plot_x(date.succ_opt().unwrap()), x + 1.0);
    }

    #[test]
    fn plot_x_rejects_garbage() {
        assert_eq!(TimeUtils::plot_x_to_date(f64::NAN), None);
        assert_eq!(TimeUtils::plot_x_to_date(1e12), None);
    }

    #[test]
    fn formats_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(TimeUtils::format_date(date), "2024-03-01");
        assert_eq!(TimeUtils::format_axis_date(date), "03/01");
    }
}

use chrono::NaiveDate;
use extend_core::Clock;

/// Local date from the browser's `Date`
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn today(&self) -> NaiveDate {
        let now = js_sys::Date::new_0();
        let year = now.get_full_year() as i32;
        let month = now.get_month() + 1;
        let day = now.get_date();
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| {
            tracing::error!(year, month, day, "browser date out of range, badges will be wrong");
            NaiveDate::default()
        })
    }
}

//! Calendar helpers pinned to the restaurant's civil timezone.

use chrono::{Days, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

/// The current date in the given timezone.
///
/// All "is this today?" decisions go through this function so day rollover
/// happens at the restaurant's midnight, not the server's.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Monday and Sunday of the ISO week containing `date`, inclusive.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = date.week(Weekday::Mon);
    (week.first_day(), week.last_day())
}

/// Monday and Friday of the ISO week containing `date`, inclusive.
///
/// The public week view shows serving days only.
pub fn weekday_span(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date.week(Weekday::Mon).first_day();
    (monday, monday + Days::new(4))
}

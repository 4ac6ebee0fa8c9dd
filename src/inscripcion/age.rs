//! Age derivation from a date-of-birth string

use chrono::{Datelike, Local, NaiveDate};

/// Age in completed years as of today, or `None` for an empty or
/// unparseable input. Date sanity beyond parsing is the validator's job.
pub fn calc_age(dob: &str) -> Option<i32> {
    calc_age_at(dob, Local::now().date_naive())
}

/// Age in completed years as of `today`.
///
/// Whole-years-completed semantics: the year difference is decremented
/// by one when the birthday has not yet occurred this year.
pub fn calc_age_at(dob: &str, today: NaiveDate) -> Option<i32> {
    if dob.is_empty() {
        return None;
    }
    let birth = NaiveDate::parse_from_str(dob, "%Y-%m-%d").ok()?;

    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

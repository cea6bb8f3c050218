//! Birthday countdown helpers for friend ordering.

use chrono::{Datelike, NaiveDate};

use crate::model::user::User;

/// Sort key for users without a birth date.
///
/// A real next birthday is at most 365 days away (the same day counts as 0),
/// so this value always sorts after every known birthday.
pub const NO_BIRTHDAY: i64 = 366;

/// Days from `today` until the next occurrence of the birth date.
///
/// A birthday today counts as 0. February 29 birthdays fall back to
/// February 28 in non-leap years.
pub fn days_until_birthday(birth_date: Option<NaiveDate>, today: NaiveDate) -> i64 {
    let Some(birth_date) = birth_date else {
        return NO_BIRTHDAY;
    };

    let this_year = birthday_in_year(birth_date, today.year());
    let next = if this_year < today {
        birthday_in_year(birth_date, today.year() + 1)
    } else {
        this_year
    };

    (next - today).num_days()
}

/// Sorts users by days until their next birthday, soonest first.
///
/// Users without a birth date sort last. The sort is stable, so users with the
/// same countdown keep their incoming order.
pub fn sort_by_upcoming_birthday(users: &mut [User], today: NaiveDate) {
    users.sort_by_key(|user| days_until_birthday(user.birth_date, today));
}

fn birthday_in_year(birth_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists every year"))
}

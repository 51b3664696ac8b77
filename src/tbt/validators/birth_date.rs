use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate};

/// How a two-digit birth year such as `"95"` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwoDigitYears {
    /// Only `dd/mm/yyyy` is accepted
    #[default]
    Reject,

    /// `yy < pivot` becomes `20yy`, anything else `19yy`. A pivot of 69 matches POSIX `strptime`.
    Pivot(u32),
}

impl TwoDigitYears {
    fn expand(&self, yy: u32) -> Option<i32> {
        match *self {
            TwoDigitYears::Reject => None,
            TwoDigitYears::Pivot(pivot) if yy < pivot => Some(2000 + yy as i32),
            TwoDigitYears::Pivot(_) => Some(1900 + yy as i32),
        }
    }
}

/// Rules a birth date must satisfy for a user to be registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDateRules {
    pub minimum_age: u32,
    pub two_digit_years: TwoDigitYears,
}

impl Default for BirthDateRules {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            two_digit_years: TwoDigitYears::default(),
        }
    }
}

impl BirthDateRules {
    /// Returns the parsed birth date when `raw` is a real date and the holder is old enough on `today`
    pub fn check(&self, raw: &str, today: NaiveDate) -> Option<NaiveDate> {
        let birth = parse_birth_date(raw, self.two_digit_years)?;

        if i64::from(age_on(birth, today)) < i64::from(self.minimum_age) {
            log::info!("Birth date {birth} is under the minimum age of {}", self.minimum_age);
            return None;
        }

        Some(birth)
    }
}

/// Parses `dd/mm/yyyy`, falling back to `dd/mm/yy` when the rules allow two-digit years.
/// Day and month may have one or two digits.
pub fn parse_birth_date(raw: &str, two_digit_years: TwoDigitYears) -> Option<NaiveDate> {
    let mut parts = raw.trim().split('/');

    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let day = parse_digits(day, 1..=2)?;
    let month = parse_digits(month, 1..=2)?;

    let year = match year.len() {
        4 => parse_digits(year, 4..=4).filter(|y| *y > 0)? as i32,
        2 => two_digit_years.expand(parse_digits(year, 2..=2)?)?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_digits(text: &str, width: RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&text.len()) || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

/// Age in whole years on `today`; one less while this year's birthday hasn't been reached
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let birthday_pending = (today.month(), today.day()) < (birth.month(), birth.day());

    today.year() - birth.year() - birthday_pending as i32
}

pub fn is_adult(raw: &str, today: NaiveDate, rules: &BirthDateRules) -> bool {
    rules.check(raw, today).is_some()
}

/// The local calendar date, used as "today" by the terminal
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

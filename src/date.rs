//! Conversion between the `DD/MM/YYYY` text used in forms and stored dates.

use crate::prelude::Date;

fn digits(part: &str, min: usize, max: usize) -> Option<u32> {
  if part.len() < min
    || part.len() > max
    || !part.bytes().all(|b| b.is_ascii_digit())
  {
    return None;
  }
  part.parse().ok()
}

/// Parses a strict `DD/MM/YYYY` date. Day and month take one or two digits,
/// the year exactly four. Anything that is not a real calendar day is
/// rejected.
pub fn parse(text: &str) -> Option<Date> {
  let mut parts = text.split('/');
  let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
  if parts.next().is_some() {
    return None;
  }

  let day = digits(day, 1, 2)?;
  let month = digits(month, 1, 2)?;
  let year = digits(year, 4, 4)?;

  Date::from_ymd_opt(year as i32, month, day)
}

/// `DD/MM/YYYY` to ISO `YYYY-MM-DD`, the storage representation.
pub fn normalize(text: &str) -> Option<String> {
  parse(text).map(|date| date.format("%Y-%m-%d").to_string())
}

pub fn display(date: Date) -> String {
  date.format("%d/%m/%Y").to_string()
}

//! Resolution of the current calendar year from the system clock.

use std::time::UNIX_EPOCH;

/// The current year in UTC, according to the system clock.
pub(crate) fn current_year_utc() -> i16 {
  let seconds = match crate::now().duration_since(UNIX_EPOCH) {
    Ok(elapsed) => elapsed.as_secs() as i64,
    Err(e) => -(e.duration().as_secs() as i64),
  };
  year_from_timestamp(seconds)
}

/// The civil year (UTC) in which the given Unix timestamp falls.
///
/// The algorithm to convert from the number of days that have elapsed since the epoch to a civil
/// year is taken from here:
/// <https://howardhinnant.github.io/date_algorithms.html#civil_from_days>
pub(crate) const fn year_from_timestamp(unix_timestamp: i64) -> i16 {
  let shifted = unix_timestamp.div_euclid(86_400) as i32 + 719_468; // Days from March 1, 0 A.D.
  let era = if shifted >= 0 { shifted } else { shifted - 146_096 } / 146_097;
  let doe = shifted - era * 146_097; // day of era: [0, 146_097)
  let year_of_era = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
  let year = year_of_era + era * 400;
  let day_of_year = doe - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
  let mp = (5 * day_of_year + 2) / 153;
  let month = if mp < 10 { mp + 3 } else { mp - 9 };
  (year + if month <= 2 { 1 } else { 0 }) as i16
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_year_from_timestamp() {
    check!(year_from_timestamp(0) == 1970);
    check!(year_from_timestamp(86_399) == 1970);
    check!(year_from_timestamp(-1) == 1969);
    check!(year_from_timestamp(946_684_800) == 2000); // 2000-01-01T00:00:00Z
    check!(year_from_timestamp(951_782_400) == 2000); // 2000-02-29T00:00:00Z
    check!(year_from_timestamp(978_307_199) == 2000); // 2000-12-31T23:59:59Z
    check!(year_from_timestamp(978_307_200) == 2001); // 2001-01-01T00:00:00Z
    check!(year_from_timestamp(-2_208_988_800) == 1900); // 1900-01-01T00:00:00Z
    check!(year_from_timestamp(-2_208_988_801) == 1899);
  }
}

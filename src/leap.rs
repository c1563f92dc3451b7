//! The Gregorian leap-year rule.

/// Return true if this is a leap year, false otherwise.
///
/// A year is a leap year iff it is divisible by 4, except centurial years, which are leap only if
/// also divisible by 400.
///
/// ## Examples
///
/// ```
/// use months::is_leap_year;
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2023));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub const fn is_leap_year(year: i16) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the year.
pub const fn days_in_year(year: i16) -> u16 {
  if is_leap_year(year) { 366 } else { 365 }
}

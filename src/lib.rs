//! The `months-rs` crate answers two small questions about the Gregorian calendar: how many days
//! a given month has, and whether a given year is a leap year.
//!
//! ## Examples
//!
//! Day counts are a pure function of the month and a reference year:
//!
//! ```
//! use months::Month;
//!
//! assert_eq!(Month::April.days(2024), 30);
//! assert_eq!(Month::February.days(2024), 29);
//! assert_eq!(Month::February.days(2023), 28);
//! ```
//!
//! The leap-year rule is available directly:
//!
//! ```
//! use months::is_leap_year;
//!
//! assert!(is_leap_year(2000));
//! assert!(!is_leap_year(1900));
//! ```

use std::fmt;
use std::time::SystemTime;

mod clock;
mod leap;
mod parse;
#[cfg(feature = "serde")]
mod serde;

pub use leap::days_in_year;
pub use leap::is_leap_year;
pub use parse::ParseMonthError;

/// A month of the Gregorian calendar year.
///
/// The discriminant is the 1-based month number, so `Month::January as u8 == 1`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
  January = 1,
  February = 2,
  March = 3,
  April = 4,
  May = 5,
  June = 6,
  July = 7,
  August = 8,
  September = 9,
  October = 10,
  November = 11,
  December = 12,
}

impl Month {
  /// All twelve months, in calendar order.
  pub const ALL: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
  ];

  /// The month with the given 1-based number, or `None` if the number is out of bounds.
  ///
  /// ## Examples
  ///
  /// ```
  /// use months::Month;
  /// assert_eq!(Month::from_number(4), Some(Month::April));
  /// assert_eq!(Month::from_number(13), None);
  /// ```
  pub const fn from_number(number: u8) -> Option<Self> {
    match number {
      1 => Some(Self::January),
      2 => Some(Self::February),
      3 => Some(Self::March),
      4 => Some(Self::April),
      5 => Some(Self::May),
      6 => Some(Self::June),
      7 => Some(Self::July),
      8 => Some(Self::August),
      9 => Some(Self::September),
      10 => Some(Self::October),
      11 => Some(Self::November),
      12 => Some(Self::December),
      _ => None,
    }
  }

  /// The 1-based month number.
  ///
  /// The return value ranges from 1 to 12.
  #[inline]
  pub const fn number(self) -> u8 {
    self as u8
  }
}

impl Month {
  /// The number of days in this month in the given year.
  ///
  /// February has 29 days on leap years and 28 otherwise; every other month has a fixed length.
  ///
  /// ## Examples
  ///
  /// ```
  /// use months::Month;
  /// assert_eq!(Month::January.days(2023), 31);
  /// assert_eq!(Month::September.days(2023), 30);
  /// assert_eq!(Month::February.days(2000), 29);
  /// assert_eq!(Month::February.days(1900), 28);
  /// ```
  pub const fn days(self, year: i16) -> u8 {
    match self {
      Self::April | Self::June | Self::September | Self::November => 30,
      Self::February => match is_leap_year(year) {
        true => 29,
        false => 28,
      },
      _ => 31,
    }
  }

  /// The number of days in this month in the current year, per the system clock (UTC).
  ///
  /// The February result varies from one calendar year to the next; use [`Month::days`] with an
  /// explicit year when a deterministic answer is needed.
  ///
  /// ## Examples
  ///
  /// ```
  /// use months::Month;
  /// assert_eq!(Month::June.days_this_year(), 30);
  /// ```
  pub fn days_this_year(self) -> u8 {
    self.days(clock::current_year_utc())
  }
}

macro_rules! month_str {
  ($($long:ident ~ $short:ident)*) => {
    impl Month {
      /// The English name of the month.
      pub const fn name(self) -> &'static str {
        match self {
          $(Self::$long => stringify!($long),)*
        }
      }

      /// The three-letter abbreviation of the month.
      pub const fn abbv(self) -> &'static str {
        match self {
          $(Self::$long => stringify!($short),)*
        }
      }
    }
  }
}
month_str! {
  January ~ Jan
  February ~ Feb
  March ~ Mar
  April ~ Apr
  May ~ May
  June ~ Jun
  July ~ Jul
  August ~ Aug
  September ~ Sep
  October ~ Oct
  November ~ Nov
  December ~ Dec
}

impl fmt::Display for Month {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(not(test))]
fn now() -> SystemTime {
  SystemTime::now()
}

#[cfg(test)]
use tests::now;

use std::str::FromStr;

use thiserror::Error;

use crate::Month;

impl FromStr for Month {
  type Err = ParseMonthError;

  /// Parse a month from its English name or three-letter abbreviation, case-insensitively.
  ///
  /// Anything else is rejected; there is no fallback month.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Month::ALL
      .into_iter()
      .find(|month| s.eq_ignore_ascii_case(month.name()) || s.eq_ignore_ascii_case(month.abbv()))
      .ok_or_else(|| ParseMonthError(s.into()))
  }
}

/// The error returned when a string does not name a month.
#[derive(Debug, Error)]
#[error("Unrecognized month name: {0}")]
pub struct ParseMonthError(String);

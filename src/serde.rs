use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Visitor;

use crate::Month;

impl Serialize for Month {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.name())
  }
}

struct MonthVisitor;

impl Visitor<'_> for MonthVisitor {
  type Value = Month;

  #[cfg(not(tarpaulin_include))]
  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("an English month name")
  }

  fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
    s.parse().map_err(E::custom)
  }
}

impl<'de> Deserialize<'de> for Month {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_str(MonthVisitor)
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_serde() -> Result<(), serde_json::Error> {
    let json = r#"{"month":"February"}"#;
    let struct_: TestStruct = serde_json::from_str(json)?;
    check!(struct_.month == Month::February);
    let json = serde_json::to_string(&struct_)?;
    check!(json == r#"{"month":"February"}"#);
    Ok(())
  }

  #[test]
  fn test_deserialize_abbv() -> Result<(), serde_json::Error> {
    let struct_: TestStruct = serde_json::from_str(r#"{"month":"Sep"}"#)?;
    check!(struct_.month == Month::September);
    check!(serde_json::to_string(&struct_)? == r#"{"month":"September"}"#);
    Ok(())
  }

  #[test]
  fn test_deserialize_invalid() {
    check!(serde_json::from_str::<TestStruct>(r#"{"month":"Smarch"}"#).is_err());
    check!(serde_json::from_str::<TestStruct>(r#"{"month":2}"#).is_err());
  }

  #[derive(Deserialize, Serialize)]
  struct TestStruct {
    month: Month,
  }
}

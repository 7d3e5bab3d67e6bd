//! Custom serde helpers for Cryptowatch's serialization formats.
//!
//! Cryptowatch encodes trades, order book levels and candles as positional
//! arrays of numbers. These modules provide reusable helpers for them.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer, de};

/// Serialize/deserialize a type using its Display/FromStr implementations.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use cryptowatch_api_client::types::OhlcPeriod;
/// use cryptowatch_api_client::types::serde_helpers::display_fromstr;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Selection {
///     #[serde(with = "display_fromstr")]
///     period: OhlcPeriod,
/// }
///
/// let selection = Selection { period: OhlcPeriod::Hour1 };
/// let json = serde_json::to_string(&selection).unwrap();
/// assert_eq!(json, r#"{"period":"3600"}"#);
/// ```
pub mod display_fromstr {
    use super::*;

    /// Serialize using Display trait.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    /// Deserialize using FromStr trait.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Helper for positional numeric rows such as `[time, open, high, low, close, volume]`.
///
/// Rows shorter than the required length are rejected. Longer rows are
/// accepted so that columns appended by the API do not break decoding.
pub mod numeric_row {
    use super::*;

    /// Deserialize an array of numbers holding at least `min_len` elements.
    pub fn deserialize<'de, D>(deserializer: D, min_len: usize) -> Result<Vec<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let row = Vec::<f64>::deserialize(deserializer)?;
        if row.len() < min_len {
            let expected = format!("an array of at least {} numbers", min_len);
            return Err(de::Error::invalid_length(row.len(), &expected.as_str()));
        }
        Ok(row)
    }
}

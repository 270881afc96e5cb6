//! Serde support: values travel as their canonical decimal string.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bigint::BigInt;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let x: BigInt = "-123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        let back: BigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(serde_json::from_str::<BigInt>("\"12x\"").is_err());
    }
}

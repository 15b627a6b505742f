use crate::error::{FeeMarketError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by a [`Dec`]
pub const DECIMAL_PLACES: u32 = 18;

/// Scaling factor between whole units and atomic units
const SCALE: u128 = 10u128.pow(DECIMAL_PLACES);

/// Non-negative fixed-precision decimal with 18 fractional digits.
///
/// Values are stored as atomic units in a `u128`, so arithmetic and
/// encoding are exact and deterministic across nodes. Controller
/// coefficients, gas prices, and learning rates all use this type.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    bincode::Encode,
    bincode::Decode,
)]
pub struct Dec(u128);

impl Dec {
    /// The additive identity
    pub const ZERO: Dec = Dec(0);

    /// The multiplicative identity
    pub const ONE: Dec = Dec(SCALE);

    /// Create a decimal from a whole number of units
    pub const fn from_int(value: u64) -> Dec {
        Dec(value as u128 * SCALE)
    }

    /// Create a decimal directly from atomic units (10^-18 units)
    pub const fn from_atomics(atomics: u128) -> Dec {
        Dec(atomics)
    }

    /// Raw atomic units backing this decimal
    pub const fn atomics(&self) -> u128 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` on overflow
    pub fn checked_add(&self, other: Dec) -> Option<Dec> {
        self.0.checked_add(other.0).map(Dec)
    }

    /// Checked subtraction; `None` on underflow
    pub fn checked_sub(&self, other: Dec) -> Option<Dec> {
        self.0.checked_sub(other.0).map(Dec)
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / SCALE, self.0 % SCALE)
    }
}

impl FromStr for Dec {
    type Err = FeeMarketError;

    fn from_str(s: &str) -> Result<Self> {
        let (int_part, frac_part) = match s.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (s, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(FeeMarketError::Config(format!("Invalid decimal: {s}")));
        }
        // Reject signs and other non-digit characters that u128 parsing
        // would otherwise accept
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(FeeMarketError::Config(format!("Invalid decimal: {s}")));
        }
        if frac_part.len() > DECIMAL_PLACES as usize {
            return Err(FeeMarketError::Config(format!(
                "Too many decimal places in {s}: maximum is {DECIMAL_PLACES}"
            )));
        }

        let int: u128 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|e| FeeMarketError::Config(format!("Invalid decimal {s}: {e}")))?
        };
        let frac: u128 = if frac_part.is_empty() {
            0
        } else {
            frac_part
                .parse()
                .map_err(|e| FeeMarketError::Config(format!("Invalid decimal {s}: {e}")))?
        };
        let frac_scaled = frac * 10u128.pow(DECIMAL_PLACES - frac_part.len() as u32);

        int.checked_mul(SCALE)
            .and_then(|v| v.checked_add(frac_scaled))
            .map(Dec)
            .ok_or_else(|| FeeMarketError::Config(format!("Decimal overflow: {s}")))
    }
}

// JSON carries decimals as strings so precision survives tooling that
// parses numbers as floats
impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert_eq!(Dec::ZERO.atomics(), 0);
        assert_eq!(Dec::ONE.atomics(), SCALE);
        assert!(Dec::ZERO.is_zero());
        assert!(!Dec::ONE.is_zero());
        assert_eq!(Dec::from_int(1), Dec::ONE);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dec::ONE.to_string(), "1.000000000000000000");
        assert_eq!(Dec::ZERO.to_string(), "0.000000000000000000");
        assert_eq!(
            Dec::from_atomics(1_500_000_000_000_000_000).to_string(),
            "1.500000000000000000"
        );
    }

    #[test]
    fn test_parsing() {
        assert_eq!("1".parse::<Dec>().unwrap(), Dec::ONE);
        assert_eq!("1.0".parse::<Dec>().unwrap(), Dec::ONE);
        assert_eq!(
            "0.875".parse::<Dec>().unwrap(),
            Dec::from_atomics(875_000_000_000_000_000)
        );
        assert_eq!(".5".parse::<Dec>().unwrap(), Dec::from_atomics(SCALE / 2));
        assert_eq!("2.".parse::<Dec>().unwrap(), Dec::from_int(2));

        assert!("".parse::<Dec>().is_err());
        assert!(".".parse::<Dec>().is_err());
        assert!("-1".parse::<Dec>().is_err());
        assert!("+1.5".parse::<Dec>().is_err());
        assert!("1.+5".parse::<Dec>().is_err());
        assert!("abc".parse::<Dec>().is_err());
        // 19 fractional digits is one too many
        assert!("0.0000000000000000001".parse::<Dec>().is_err());
    }

    #[test]
    fn test_display_parse_round_trip() {
        for dec in [
            Dec::ZERO,
            Dec::ONE,
            Dec::from_int(42),
            Dec::from_atomics(123_456_789),
        ] {
            assert_eq!(dec.to_string().parse::<Dec>().unwrap(), dec);
        }
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(
            Dec::ONE.checked_add(Dec::ONE).unwrap(),
            Dec::from_int(2)
        );
        assert_eq!(Dec::ONE.checked_sub(Dec::ONE).unwrap(), Dec::ZERO);
        assert!(Dec::ZERO.checked_sub(Dec::ONE).is_none());
        assert!(Dec::from_atomics(u128::MAX).checked_add(Dec::ONE).is_none());
    }

    #[test]
    fn test_ordering() {
        assert!(Dec::ZERO < Dec::ONE);
        assert!(Dec::from_int(2) > Dec::ONE);
    }

    #[test]
    fn test_json_round_trip() {
        let dec: Dec = "1.25".parse().unwrap();
        let json = serde_json::to_string(&dec).unwrap();
        assert_eq!(json, "\"1.250000000000000000\"");
        let back: Dec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dec);
    }
}

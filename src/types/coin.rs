use crate::types::Dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decimal amount of a single denomination.
///
/// This is the unit the denom resolver converts between denominations;
/// the fee market itself treats conversion as opaque.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Dec,
}

impl DecCoin {
    pub fn new(denom: impl Into<String>, amount: Dec) -> DecCoin {
        DecCoin {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

use crate::error::{FeeMarketError, Result};
use crate::types::Dec;
use crate::utils::deserialize;
use serde::{Deserialize, Serialize};

/// Tuning configuration for the AIMD fee controller.
///
/// Written rarely (genesis and governance updates), read on every
/// transaction. All fields are non-negative decimals by construction.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Params {
    /// Additive-increase gain
    pub alpha: Dec,
    /// Multiplicative-decrease gain
    pub beta: Dec,
    /// Window-utilization gain
    pub gamma: Dec,
    /// Burn/tip split coefficient
    pub delta: Dec,
    /// Floor for the base gas price
    pub min_base_gas_price: Dec,
    /// Lower bound for the learning rate
    pub min_learning_rate: Dec,
    /// Upper bound for the learning rate
    pub max_learning_rate: Dec,
}

impl Default for Params {
    // Every coefficient defaults to one: a zero default would silently
    // disable the controller term it multiplies.
    fn default() -> Self {
        Params {
            alpha: Dec::ONE,
            beta: Dec::ONE,
            gamma: Dec::ONE,
            delta: Dec::ONE,
            min_base_gas_price: Dec::ONE,
            min_learning_rate: Dec::ONE,
            max_learning_rate: Dec::ONE,
        }
    }
}

impl Params {
    /// Validate configuration invariants
    pub fn validate(&self) -> Result<()> {
        if self.min_learning_rate > self.max_learning_rate {
            return Err(FeeMarketError::Config(format!(
                "Minimum learning rate {} cannot exceed maximum learning rate {}",
                self.min_learning_rate, self.max_learning_rate
            )));
        }
        Ok(())
    }

    /// Decode stored bytes into this instance, replacing its contents.
    ///
    /// Used by the pooled fast path; `Params` has no heap-allocated
    /// fields, so this never allocates.
    pub fn decode_into(&mut self, bytes: &[u8]) -> Result<()> {
        *self = deserialize(bytes)?;
        Ok(())
    }
}

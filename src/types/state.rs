use crate::error::{FeeMarketError, Result};
use crate::types::Dec;
use serde::{Deserialize, Serialize};

/// Number of recent block gas-usage samples retained in the window
pub const SAMPLE_WINDOW: usize = 10;

/// Live controller state, mutated on every block.
///
/// `window` holds per-block gas-usage samples in insertion order; the
/// controller evicts the oldest sample when the window is full. The
/// storage layer only guarantees that order is preserved and that a
/// recycled instance never carries samples from a previous occupant.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct State {
    /// Current base gas price floor
    pub base_gas_price: Dec,
    /// Current adaptation rate
    pub learning_rate: Dec,
    /// Recent per-block gas usage, oldest first
    pub window: Vec<u64>,
}

impl Default for State {
    fn default() -> Self {
        State {
            base_gas_price: Dec::ZERO,
            learning_rate: Dec::ZERO,
            window: Vec::with_capacity(SAMPLE_WINDOW),
        }
    }
}

impl State {
    /// Decode stored bytes into a fresh instance
    pub fn decode(bytes: &[u8]) -> Result<State> {
        let mut state = State::default();
        state.decode_into(bytes)?;
        Ok(state)
    }

    /// Decode stored bytes into this instance without allocating.
    ///
    /// The window is cleared before any byte is parsed, so a recycled
    /// pool instance never leaks samples from its previous use. Scalars
    /// are assigned in place and samples are pushed into the cleared
    /// window, which retains its capacity across reuse.
    ///
    /// The parse must mirror the derived bincode encoding: fields in
    /// declaration order, the window as a u64 length followed by its
    /// samples.
    pub fn decode_into(&mut self, bytes: &[u8]) -> Result<()> {
        self.window.clear();

        let config = bincode::config::standard();
        let mut offset = 0usize;

        let (base_gas_price, read) =
            bincode::decode_from_slice::<Dec, _>(&bytes[offset..], config)?;
        offset += read;
        let (learning_rate, read) =
            bincode::decode_from_slice::<Dec, _>(&bytes[offset..], config)?;
        offset += read;
        let (len, read) = bincode::decode_from_slice::<u64, _>(&bytes[offset..], config)?;
        offset += read;

        // Each sample takes at least one byte; a length larger than the
        // remaining buffer cannot be honest
        if len as usize > bytes.len() - offset {
            return Err(FeeMarketError::MalformedRecord(format!(
                "Window length {len} exceeds remaining buffer of {} bytes",
                bytes.len() - offset
            )));
        }

        self.base_gas_price = base_gas_price;
        self.learning_rate = learning_rate;
        for _ in 0..len {
            let (sample, read) = bincode::decode_from_slice::<u64, _>(&bytes[offset..], config)?;
            offset += read;
            self.window.push(sample);
        }

        if offset != bytes.len() {
            return Err(FeeMarketError::MalformedRecord(format!(
                "{} trailing bytes after state record",
                bytes.len() - offset
            )));
        }

        Ok(())
    }
}

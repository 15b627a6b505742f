//! Store access layer for the fee market module
//!
//! The [`Keeper`] is the sole authorized path for reading and writing
//! fee market state in the host's key-value store. Every record has two
//! read flavors: a plain path that decodes into a fresh instance, used
//! off the hot path, and a pooled fast path for the ante/post transaction
//! handlers that touch this state on every transaction.

use crate::error::{FeeMarketError, Result};
use crate::storage::KVStore;
use crate::types::{DecCoin, Params, Pool, Pooled, State};
use crate::utils::{deserialize, serialize, validate_address};
use data_encoding::HEXLOWER;
use log::info;

/// Storage key for the controller configuration record
pub const KEY_PARAMS: &[u8] = b"params";
/// Storage key for the live controller state record
pub const KEY_STATE: &[u8] = b"state";
/// Storage key for the activation height marker
pub const KEY_ENABLED_HEIGHT: &[u8] = b"enabled_height";

/// Sentinel returned by [`Keeper::get_enabled_height`] when the fee
/// market has not been enabled yet. Never persisted.
pub const HEIGHT_NOT_ENABLED: i64 = -1;

/// Account capability held by the keeper on behalf of collaborators.
pub trait AccountKeeper: Send + Sync {
    /// Address of a named module account, if one exists
    fn module_address(&self, module: &str) -> Option<String>;
}

/// Converts a decimal coin into a target denomination.
///
/// Conversion rates live outside this module; the keeper only delegates.
pub trait DenomResolver: Send + Sync {
    fn convert_to_denom(&self, coin: DecCoin, denom: &str) -> Result<DecCoin>;
}

/// The fee market keeper.
pub struct Keeper {
    // Held for collaborators; this core does not call into it
    #[allow(dead_code)]
    account_keeper: Box<dyn AccountKeeper>,
    resolver: Option<Box<dyn DenomResolver>>,

    params_pool: Pool<Params>,
    state_pool: Pool<State>,

    // The address permitted to submit parameter updates. Typically the
    // governance module's address.
    authority: String,
}

impl Keeper {
    /// Construct a new fee market keeper.
    ///
    /// Fails with [`FeeMarketError::InvalidAuthority`] when `authority`
    /// is not a well-formed chain address; an invalid authority can
    /// never authorize anything, so the composition root should treat
    /// this as fatal.
    pub fn new(
        account_keeper: Box<dyn AccountKeeper>,
        resolver: Option<Box<dyn DenomResolver>>,
        authority: &str,
    ) -> Result<Keeper> {
        if !validate_address(authority) {
            return Err(FeeMarketError::InvalidAuthority(authority.to_string()));
        }

        Ok(Keeper {
            account_keeper,
            resolver,
            params_pool: Pool::new(Params::default),
            state_pool: Pool::new(State::default),
            authority: authority.to_string(),
        })
    }

    /// The address permitted to submit parameter-update transactions
    pub fn get_authority(&self) -> &str {
        &self.authority
    }

    /// Install or replace the denom resolver
    pub fn set_denom_resolver(&mut self, resolver: Box<dyn DenomResolver>) {
        self.resolver = Some(resolver);
    }

    /// Convert `coin` into `denom` through the installed resolver
    pub fn resolve_to_denom(&self, coin: DecCoin, denom: &str) -> Result<DecCoin> {
        match &self.resolver {
            Some(resolver) => resolver.convert_to_denom(coin, denom),
            None => Err(FeeMarketError::ResolverNotConfigured),
        }
    }

    /// Height at which the fee market was enabled, or
    /// [`HEIGHT_NOT_ENABLED`] when the marker has never been set
    pub fn get_enabled_height(&self, store: &dyn KVStore) -> Result<i64> {
        let bytes = match store.get(KEY_ENABLED_HEIGHT)? {
            Some(bytes) => bytes,
            None => return Ok(HEIGHT_NOT_ENABLED),
        };

        let text = std::str::from_utf8(&bytes)
            .map_err(|e| FeeMarketError::InvalidHeight(format!("Not valid UTF-8: {e}")))?;
        text.parse::<i64>()
            .map_err(|e| FeeMarketError::InvalidHeight(format!("Not a valid integer: {e}")))
    }

    /// Record the height at which the fee market was enabled
    pub fn set_enabled_height(&self, store: &dyn KVStore, height: i64) -> Result<()> {
        store.set(KEY_ENABLED_HEIGHT, height.to_string().as_bytes())
    }

    /// Controller configuration, decoded into a fresh instance
    pub fn get_params(&self, store: &dyn KVStore) -> Result<Params> {
        let bytes = Self::must_get(store, KEY_PARAMS, "params")?;
        deserialize(&bytes)
    }

    /// Controller configuration, decoded into a pooled instance.
    ///
    /// Intended for hot paths (ante/post handlers). The instance goes
    /// back to the pool when the returned handle drops.
    pub fn get_params_fast(&self, store: &dyn KVStore) -> Result<Pooled<'_, Params>> {
        // The store handle may itself be pool-backed; its release hook
        // runs whatever the read's outcome
        let bytes = store.get(KEY_PARAMS);
        store.release();
        let bytes = bytes?.ok_or_else(|| Self::absent(KEY_PARAMS, "params"))?;

        let mut params = self.params_pool.get();
        // On a decode error `params` drops here and the instance returns
        // to the pool before the error propagates
        params.decode_into(&bytes)?;
        Ok(params)
    }

    /// Validate and store the controller configuration
    pub fn set_params(&self, store: &dyn KVStore, params: &Params) -> Result<()> {
        params.validate()?;
        let bytes = serialize(params)?;
        store.set(KEY_PARAMS, &bytes)?;
        info!("Stored fee market params");
        Ok(())
    }

    /// Live controller state, decoded into a fresh instance
    pub fn get_state(&self, store: &dyn KVStore) -> Result<State> {
        let bytes = Self::must_get(store, KEY_STATE, "state")?;
        State::decode(&bytes)
    }

    /// Live controller state, decoded into a pooled instance.
    ///
    /// Intended for hot paths (ante/post handlers). `decode_into` clears
    /// the window before parsing, so samples from the instance's
    /// previous use never leak into the decoded record. The instance
    /// goes back to the pool when the returned handle drops.
    pub fn get_state_fast(&self, store: &dyn KVStore) -> Result<Pooled<'_, State>> {
        let bytes = store.get(KEY_STATE);
        store.release();
        let bytes = bytes?.ok_or_else(|| Self::absent(KEY_STATE, "state"))?;

        let mut state = self.state_pool.get();
        // On a decode error `state` drops here and the instance returns
        // to the pool before the error propagates
        state.decode_into(&bytes)?;
        Ok(state)
    }

    /// Store the live controller state
    pub fn set_state(&self, store: &dyn KVStore, state: &State) -> Result<()> {
        let bytes = serialize(state)?;
        store.set(KEY_STATE, &bytes)
    }

    /// Seed the store with default Params and State.
    ///
    /// The plain and pooled get paths treat an absent record as an
    /// error, so a chain must seed its store at genesis before the fee
    /// market serves traffic.
    pub fn init_genesis_defaults(&self, store: &dyn KVStore) -> Result<()> {
        self.set_params(store, &Params::default())?;
        self.set_state(store, &State::default())?;
        info!("Seeded fee market store with default params and state");
        Ok(())
    }

    // Read a record key that must be present
    fn must_get(store: &dyn KVStore, key: &[u8], name: &str) -> Result<Vec<u8>> {
        store.get(key)?.ok_or_else(|| Self::absent(key, name))
    }

    fn absent(key: &[u8], name: &str) -> FeeMarketError {
        FeeMarketError::MalformedRecord(format!(
            "{name} not found in store under key {}; seed the store at genesis",
            HEXLOWER.encode(key)
        ))
    }
}

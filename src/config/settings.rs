use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_DATA_DIR: &str = "./data";
static DEFAULT_FEE_DENOM: &str = "stake";

const DATA_DIR_KEY: &str = "DATA_DIR";
const FEE_DENOM_KEY: &str = "FEE_DENOM";

/// Process-level settings for the fee market tooling.
///
/// Seeded from `FEEMARKET_DATA_DIR` and `FEEMARKET_FEE_DENOM` when set.
pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let mut map = HashMap::new();

        let data_dir =
            env::var("FEEMARKET_DATA_DIR").unwrap_or_else(|_| String::from(DEFAULT_DATA_DIR));
        map.insert(String::from(DATA_DIR_KEY), data_dir);

        let fee_denom =
            env::var("FEEMARKET_FEE_DENOM").unwrap_or_else(|_| String::from(DEFAULT_FEE_DENOM));
        map.insert(String::from(FEE_DENOM_KEY), fee_denom);

        Config {
            inner: RwLock::new(map),
        }
    }

    pub fn get_data_dir(&self) -> String {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner
            .get(DATA_DIR_KEY)
            .expect("Data dir should always be present in config")
            .clone()
    }

    pub fn set_data_dir(&self, dir: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(DATA_DIR_KEY), dir);
    }

    pub fn get_fee_denom(&self) -> String {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner
            .get(FEE_DENOM_KEY)
            .expect("Fee denom should always be present in config")
            .clone()
    }

    pub fn set_fee_denom(&self, denom: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(FEE_DENOM_KEY), denom);
    }
}

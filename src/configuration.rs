use base_x::{presets, Options};
use std::{env, error};

#[derive(Debug, Clone)]
pub struct Configuration {
    alphabet: String,
    rfc4648: bool,
    threads: usize,
    batch_size: usize,
    iterations: usize,
    input_size: usize,
    seed: String,
}

fn var(key: &str, default: Option<String>) -> Result<String, String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

fn positive(key: &str, default: usize) -> Result<usize, String> {
    match var_map(key, |value| value.parse::<usize>(), Some(default))? {
        0 => Err(format!("Invalid {} 0", key)),
        value => Ok(value),
    }
}

impl Configuration {
    /// Reads `ALPHABET` (or `PRESET`), `RFC4648`, `THREADS`, `BATCH_SIZE`, `ITERATIONS`, `INPUT_SIZE` and `SEED`.
    pub fn new() -> Result<Self, String> {
        let alphabet = match var("ALPHABET", None) {
            Ok(alphabet) => alphabet,
            Err(_) => {
                let preset = var("PRESET", Some("base58".to_string()))?;
                presets::find(&preset).ok_or(format!("Invalid PRESET {}", preset))?.to_string()
            }
        };
        let rfc4648 = var_map("RFC4648", |value| value.parse(), Some(false))?;
        let threads = positive("THREADS", 1)?;
        let batch_size = positive("BATCH_SIZE", 1024)?;
        let iterations = positive("ITERATIONS", 100_000)?;
        let input_size = var_map("INPUT_SIZE", |value| value.parse(), Some(32))?;
        let seed = var("SEED", Some("base-x".to_string()))?;
        Ok(Self {
            alphabet,
            rfc4648,
            threads,
            batch_size,
            iterations,
            input_size,
            seed,
        })
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    pub fn options(&self) -> Options {
        Options { rfc4648: self.rfc4648 }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

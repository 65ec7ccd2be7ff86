use crate::base_common::{alphabet, Alphabet, AlphabetCache};
use crate::base_n::Strategy;
use crate::{Error, Logger};
use std::{env, error, sync::Arc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    alphabet_id: usize,
    alphabet: Option<String>,
    strategy: Strategy,
    verbose: bool,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, Error> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|_| Error::new(format!("Invalid {} {}", key, value))),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    /// Reads `BASE_N_ALPHABET_ID`, `BASE_N_ALPHABET`, `BASE_N_STRATEGY` and
    /// `BASE_N_VERBOSE` from the environment.
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let alphabet_id = var_map(&lookup, "BASE_N_ALPHABET_ID", |id| id.parse(), Some(58))?;
        let alphabet = var(&lookup, "BASE_N_ALPHABET", None).ok();
        let strategy = var_map(&lookup, "BASE_N_STRATEGY", |strategy| strategy.parse(), Some(Strategy::default()))?;
        let verbose = var_map(&lookup, "BASE_N_VERBOSE", |verbose| verbose.parse(), Some(false))?;
        Ok(Self {
            alphabet_id,
            alphabet,
            strategy,
            verbose,
        })
    }

    pub fn alphabet_id(&self) -> usize {
        self.alphabet_id
    }

    /// Custom alphabet characters, if set. Takes precedence over the alphabet id.
    pub fn alphabet_characters(&self) -> Option<&str> {
        self.alphabet.as_deref()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn logger(&self) -> Logger {
        if self.verbose {
            Logger::new()
        } else {
            Logger::silent()
        }
    }

    pub fn cache(&self) -> AlphabetCache {
        AlphabetCache::new(self.logger())
    }

    pub fn alphabet(&self, cache: &AlphabetCache) -> Result<Arc<Alphabet>, alphabet::Error> {
        match &self.alphabet {
            Some(characters) => cache.get(characters),
            None => cache.get_by_id(self.alphabet_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;
    use crate::base_common::alphabet;
    use crate::base_n::Strategy;
    use std::collections::HashMap;

    fn configuration(vars: &[(&str, &str)]) -> Result<Configuration, crate::Error> {
        let vars: HashMap<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Configuration::from_lookup(move |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let configuration = configuration(&[]).unwrap();
        assert_eq!(configuration.alphabet_id(), 58);
        assert_eq!(configuration.alphabet_characters(), None);
        assert_eq!(configuration.strategy(), Strategy::BigInt);
        assert!(!configuration.verbose());
        assert!(!configuration.logger().enabled());
        let cache = configuration.cache();
        assert_eq!(configuration.alphabet(&cache).unwrap().base(), 58);
    }

    #[test]
    fn custom() {
        let configuration = configuration(&[
            ("BASE_N_ALPHABET_ID", "16"),
            ("BASE_N_ALPHABET", "xyz"),
            ("BASE_N_STRATEGY", "LOOP"),
            ("BASE_N_VERBOSE", "true"),
        ])
        .unwrap();
        assert_eq!(configuration.alphabet_id(), 16);
        assert_eq!(configuration.strategy(), Strategy::Loop);
        assert!(configuration.logger().enabled());
        let cache = configuration.cache();
        assert_eq!(configuration.alphabet(&cache).unwrap().characters(), "xyz");
    }

    #[test]
    fn invalid() {
        assert_eq!(
            configuration(&[("BASE_N_STRATEGY", "fast")]).unwrap_err().message(),
            "Invalid BASE_N_STRATEGY fast"
        );
        assert_eq!(
            configuration(&[("BASE_N_ALPHABET_ID", "x")]).unwrap_err().message(),
            "Invalid BASE_N_ALPHABET_ID x"
        );
        let configuration = configuration(&[("BASE_N_ALPHABET_ID", "7")]).unwrap();
        assert_eq!(
            configuration.alphabet(&configuration.cache()).unwrap_err(),
            alphabet::Error::UnknownAlphabet { id: 7 }
        );
    }
}

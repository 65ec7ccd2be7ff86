use super::alphabet::{alphabet_string, Alphabet, Error};
use crate::Logger;
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// Lazily built alphabets, keyed by their literal characters.
///
/// Entries are immutable once inserted. Two threads racing on the same missing
/// key both build an alphabet, only the first insert is kept and both get it back.
pub struct AlphabetCache {
    alphabets: RwLock<HashMap<String, Arc<Alphabet>>>,
    logger: Logger,
}

impl AlphabetCache {
    pub fn new(logger: Logger) -> Self {
        Self {
            alphabets: RwLock::new(HashMap::new()),
            logger,
        }
    }

    // Entries are never mutated in place, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Alphabet>>> {
        self.alphabets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Alphabet>>> {
        self.alphabets.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, characters: &str) -> Result<Arc<Alphabet>, Error> {
        if let Some(alphabet) = self.read().get(characters) {
            return Ok(alphabet.clone());
        }
        let alphabet = Arc::new(Alphabet::new(characters)?);
        let mut alphabets = self.write();
        if let Some(existing) = alphabets.get(characters) {
            return Ok(existing.clone());
        }
        alphabets.insert(characters.to_owned(), alphabet.clone());
        self.logger
            .log(format!("Built base {} alphabet ({} cached)", alphabet.base(), alphabets.len()));
        Ok(alphabet)
    }

    pub fn get_by_id(&self, id: usize) -> Result<Arc<Alphabet>, Error> {
        let characters = alphabet_string(id).ok_or(Error::UnknownAlphabet { id })?;
        self.get(characters)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for AlphabetCache {
    fn default() -> Self {
        Self::new(Logger::silent())
    }
}

//! Memoizing transcriber wrapper.
//!
//! Successful transcriptions (including empty ones) are cached; failures are
//! not, so a transient error is retried next time.

use crate::error::Result;
use crate::transcribe::transcriber::Transcriber;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Transcriber that caches the results of an inner transcriber.
pub struct CachedTranscriber<T: Transcriber> {
    inner: T,
    cache: Mutex<HashMap<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
    name: String,
}

impl<T: Transcriber> CachedTranscriber<T> {
    pub fn new(inner: T) -> Self {
        let name = format!("cached({})", inner.name());
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            name,
        }
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of lookups forwarded to the inner transcriber.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    fn cached(&self, word: &str) -> Option<String> {
        match self.cache.lock() {
            Ok(cache) => cache.get(word).cloned(),
            Err(poisoned) => poisoned.into_inner().get(word).cloned(),
        }
    }

    fn store(&self, word: &str, ipa: &str) {
        let mut cache = match self.cache.lock() {
            Ok(cache) => cache,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache.insert(word.to_string(), ipa.to_string());
    }
}

impl<T: Transcriber> Transcriber for CachedTranscriber<T> {
    fn transcribe(&self, word: &str) -> Result<String> {
        if let Some(ipa) = self.cached(word) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(ipa);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        // The lock is not held across the inner call so workers transcribing
        // different words do not serialize on each other.
        let ipa = self.inner.transcribe(word)?;
        self.store(word, &ipa);
        Ok(ipa)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }
}

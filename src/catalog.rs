//! Model catalog seam.
//!
//! The host's model manager knows the trigger phrases attached to each
//! installed LoRA. Nodes only need that one lookup, so the boundary is
//! a single-method trait the host implements over its manager.

use std::collections::HashMap;
use thiserror::Error;

/// The catalog has no model under the given key. Maps to a
/// client-facing "not found" in the host; never retried.
#[derive(Debug, Error, PartialEq)]
#[error("unknown model key [{key}]")]
pub struct UnknownModelError {
  pub key: String,
}

/// Lookup of LoRA trigger phrases by model key.
pub trait ModelCatalog: Send + Sync {
  fn trigger_phrases(&self, key: &str) -> Result<Vec<String>, UnknownModelError>;
}

/// Map-backed catalog for tests and hosts without a model manager.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
  phrases: HashMap<String, Vec<String>>,
}

impl InMemoryCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a model key with its trigger phrases.
  pub fn insert(&mut self, key: impl Into<String>, phrases: Vec<String>) {
    self.phrases.insert(key.into(), phrases);
  }
}

impl ModelCatalog for InMemoryCatalog {
  fn trigger_phrases(&self, key: &str) -> Result<Vec<String>, UnknownModelError> {
    self
      .phrases
      .get(key)
      .cloned()
      .ok_or_else(|| UnknownModelError {
        key: key.to_string(),
      })
  }
}

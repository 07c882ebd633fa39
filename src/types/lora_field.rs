//! A LoRA reference with an applied weight.

use serde::{Deserialize, Serialize};

/// Opaque reference to a LoRA the host's model manager can resolve.
/// Only `key` (lookups) and `name` (display) matter to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoraRef {
  pub key: String,
  pub name: String,
}

/// A LoRA reference plus the weight to apply it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoraField {
  pub lora: LoraRef,
  pub weight: f64,
}

impl LoraField {
  pub fn new(key: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
    Self {
      lora: LoraRef {
        key: key.into(),
        name: name.into(),
      },
      weight,
    }
  }

  /// Copy of this field carrying a different weight.
  pub fn with_weight(&self, weight: f64) -> Self {
    Self {
      lora: self.lora.clone(),
      weight,
    }
  }
}

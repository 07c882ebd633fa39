//! Input record for the random mixer.

use super::LoraField;

/// What to mix: candidate LoRAs, optional seed, and the count and
/// weight bounds. `seed: None` means non-deterministic. Plain data;
/// the mixer validates the bounds.
#[derive(Debug, Clone)]
pub struct MixRequest {
  pub loras: Vec<LoraField>,
  pub seed: Option<u64>,
  pub min_loras: u32,
  pub max_loras: u32,
  pub min_weight: f64,
  pub max_weight: f64,
}

impl Default for MixRequest {
  /// Mirrors the host node defaults: 1..=3 LoRAs, weights 0.05..=1.0.
  fn default() -> Self {
    Self {
      loras: Vec::new(),
      seed: None,
      min_loras: 1,
      max_loras: 3,
      min_weight: 0.05,
      max_weight: 1.0,
    }
  }
}

//! Constrained random LoRA selection with freshly sampled weights.
//!
//! The host hands over a collection of candidate LoRAs plus count and
//! weight bounds; the mixer draws a random sub-selection with
//! replacement and samples a new weight for every draw. All draws come
//! from one generator instance so a seeded request reproduces
//! bit-for-bit.

use crate::types::{LoraField, MixRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors surfaced by the mixer. None of these are retried; the host
/// maps them to its own bad-request response.
#[derive(Debug, Error, PartialEq)]
pub enum MixError {
  /// The input collection is shorter than the requested minimum.
  #[error(
    "random mixer was not provided enough LoRAs [{supplied}] in the input collection to honour the minimum LoRAs value [{needed}]"
  )]
  InsufficientLoras { supplied: usize, needed: usize },
  /// `min_loras` is zero or exceeds `max_loras`.
  #[error("invalid LoRA count range [{min}, {max}]")]
  InvalidCountRange { min: u32, max: u32 },
  /// `min_weight` exceeds `max_weight`.
  #[error("invalid weight range [{min}, {max}]")]
  InvalidWeightRange { min: f64, max: f64 },
}

/// Result of one mix: selected LoRAs and their `name:weight` strings,
/// both in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Mix {
  pub loras: Vec<LoraField>,
  pub names: Vec<String>,
}

/// Runs a mix with a private generator: seeded from `request.seed` when
/// present, from entropy otherwise.
#[instrument(level = "trace", skip(request))]
pub fn mix(request: &MixRequest) -> Result<Mix, MixError> {
  let mut rng = match request.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };
  mix_with_rng(request, &mut rng)
}

/// Runs a mix drawing every random value from the caller-supplied
/// generator. Each draw returns a fresh `LoraField` copy; drawing the
/// same LoRA twice yields two independent entries with their own
/// weights.
pub fn mix_with_rng<R: Rng>(request: &MixRequest, rng: &mut R) -> Result<Mix, MixError> {
  validate(request)?;

  let count = rng.gen_range(request.min_loras..=request.max_loras);
  let mut loras: Vec<LoraField> = Vec::with_capacity(count as usize);
  let mut names: Vec<String> = Vec::with_capacity(count as usize);
  for _ in 0..count {
    let picked = &request.loras[rng.gen_range(0..request.loras.len())];
    let weight = round_weight(rng.gen_range(request.min_weight..=request.max_weight));
    names.push(format!("{}:{}", picked.lora.name, weight));
    loras.push(picked.with_weight(weight));
  }

  info!(count = names.len(), "loras selected by random mixer");
  for name in &names {
    debug!(lora = %name, "selected");
  }

  Ok(Mix { loras, names })
}

/// Checks the request bounds (ranges first, then supply).
fn validate(request: &MixRequest) -> Result<(), MixError> {
  if request.min_loras == 0 || request.min_loras > request.max_loras {
    return Err(MixError::InvalidCountRange {
      min: request.min_loras,
      max: request.max_loras,
    });
  }
  if request.min_weight > request.max_weight {
    return Err(MixError::InvalidWeightRange {
      min: request.min_weight,
      max: request.max_weight,
    });
  }
  if request.loras.len() < request.min_loras as usize {
    return Err(MixError::InsufficientLoras {
      supplied: request.loras.len(),
      needed: request.min_loras as usize,
    });
  }
  Ok(())
}

/// Rounds a sampled weight to 2 decimal places (half away from zero).
fn round_weight(w: f64) -> f64 {
  (w * 100.0).round() / 100.0
}

//! Random LoRA mixer node: wraps the mixer core and resolves trigger
//! phrases for the selected LoRAs through the model catalog.

use crate::catalog::{ModelCatalog, UnknownModelError};
use crate::delimited;
use crate::mixer::{self, MixError};
use crate::node::{AnyItem, InputStreams, Node, NodeExecutionError, OutputStreams, port_stream};
use crate::types::{LoraField, MixRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Input for RandomMixerNode.
#[derive(Debug, Clone)]
pub struct RandomMixerInput {
  /// Candidate LoRAs to select from.
  pub loras: Vec<LoraField>,
  /// `-1` means non-deterministic; any other value seeds the mix.
  pub seed: i64,
  pub min_loras: u32,
  pub max_loras: u32,
  pub min_weight: f64,
  pub max_weight: f64,
  /// Placed between trigger words in the `trigger_words` output.
  pub trigger_word_delimiter: String,
  /// Placed between `name:weight` entries in the `lora_names` output.
  pub lora_names_delimiter: String,
}

impl Default for RandomMixerInput {
  fn default() -> Self {
    Self {
      loras: Vec::new(),
      seed: -1,
      min_loras: 1,
      max_loras: 3,
      min_weight: 0.05,
      max_weight: 1.0,
      trigger_word_delimiter: delimited::DEFAULT_DELIMITER.to_string(),
      lora_names_delimiter: delimited::DEFAULT_DELIMITER.to_string(),
    }
  }
}

/// Output: the selection plus delimited trigger-word and name strings.
#[derive(Debug, Clone)]
pub struct RandomMixerOutput {
  pub loras: Vec<LoraField>,
  pub trigger_words: String,
  pub lora_names: String,
}

/// Failures of one mixer invocation, routed to the `error` port.
#[derive(Debug, Error)]
pub enum RandomMixerError {
  #[error(transparent)]
  Mix(#[from] MixError),
  #[error(transparent)]
  UnknownModel(#[from] UnknownModelError),
}

/// Runs one mix and resolves trigger phrases for the selected LoRAs.
pub(crate) fn run_mixer(
  input: &RandomMixerInput,
  catalog: &dyn ModelCatalog,
) -> Result<RandomMixerOutput, RandomMixerError> {
  let request = MixRequest {
    loras: input.loras.clone(),
    seed: if input.seed == -1 {
      None
    } else {
      Some(input.seed as u64)
    },
    min_loras: input.min_loras,
    max_loras: input.max_loras,
    min_weight: input.min_weight,
    max_weight: input.max_weight,
  };
  let mix = mixer::mix(&request)?;

  let mut trigger_words: Vec<String> = Vec::new();
  for field in &mix.loras {
    trigger_words.extend(catalog.trigger_phrases(&field.lora.key)?);
  }

  Ok(RandomMixerOutput {
    trigger_words: delimited::join(&trigger_words, &input.trigger_word_delimiter, false),
    lora_names: delimited::join(&mix.names, &input.lora_names_delimiter, false),
    loras: mix.loras,
  })
}

/// Node that mixes each incoming request, routing failures to the
/// `error` port.
pub struct RandomMixerNode {
  /// Node display name.
  name: String,
  /// Input port names (e.g. `in`).
  input_ports: Vec<String>,
  /// Output port names (e.g. `out`, `error`).
  output_ports: Vec<String>,
  catalog: Arc<dyn ModelCatalog>,
}

impl RandomMixerNode {
  pub fn new(name: impl Into<String>, catalog: Arc<dyn ModelCatalog>) -> Self {
    Self {
      name: name.into(),
      input_ports: vec!["in".to_string()],
      output_ports: vec!["out".to_string(), "error".to_string()],
      catalog,
    }
  }
}

#[async_trait]
impl Node for RandomMixerNode {
  fn name(&self) -> &str {
    &self.name
  }

  fn set_name(&mut self, name: &str) {
    self.name = name.to_string();
  }

  fn input_port_names(&self) -> &[String] {
    &self.input_ports
  }

  fn output_port_names(&self) -> &[String] {
    &self.output_ports
  }

  fn has_input_port(&self, name: &str) -> bool {
    name == "in"
  }

  fn has_output_port(&self, name: &str) -> bool {
    name == "out" || name == "error"
  }

  async fn execute(&self, mut inputs: InputStreams) -> Result<OutputStreams, NodeExecutionError> {
    let in_stream = inputs.remove("in").ok_or("Missing 'in' input")?;
    let (out_tx, out_rx) = tokio::sync::mpsc::channel(16);
    let (err_tx, err_rx) = tokio::sync::mpsc::channel(16);
    let catalog = Arc::clone(&self.catalog);

    tokio::spawn(async move {
      use futures::StreamExt;
      let mut s = in_stream;
      while let Some(item) = s.next().await {
        let input = match item.downcast::<RandomMixerInput>() {
          Ok(arc) => (*arc).clone(),
          Err(_) => {
            let _ = err_tx
              .send(Arc::new("Expected RandomMixerInput".to_string()) as AnyItem)
              .await;
            continue;
          }
        };
        match run_mixer(&input, catalog.as_ref()) {
          Ok(output) => {
            let _ = out_tx.send(Arc::new(output) as AnyItem).await;
          }
          Err(e) => {
            let _ = err_tx.send(Arc::new(e.to_string()) as AnyItem).await;
          }
        }
      }
    });

    let mut outputs = HashMap::new();
    outputs.insert("out".to_string(), port_stream(out_rx));
    outputs.insert("error".to_string(), port_stream(err_rx));
    Ok(outputs)
  }
}

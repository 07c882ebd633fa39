//! Reapply a weight to an already-selected LoRA.

use crate::node::{AnyItem, InputStreams, Node, NodeExecutionError, OutputStreams, port_stream};
use crate::types::LoraField;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Input for ReapplyWeightNode.
#[derive(Debug, Clone)]
pub struct ReapplyWeightInput {
  pub lora: LoraField,
  pub weight: f64,
}

/// Output: a copy of the LoRA carrying the new weight.
#[derive(Debug, Clone)]
pub struct ReapplyWeightOutput {
  pub lora: LoraField,
}

pub(crate) fn reapply_weight(input: &ReapplyWeightInput) -> ReapplyWeightOutput {
  ReapplyWeightOutput {
    lora: input.lora.with_weight(input.weight),
  }
}

/// Node that re-weights each incoming LoRA.
pub struct ReapplyWeightNode {
  /// Node display name.
  name: String,
  input_ports: Vec<String>,
  output_ports: Vec<String>,
}

impl ReapplyWeightNode {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      input_ports: vec!["in".to_string()],
      output_ports: vec!["out".to_string()],
    }
  }
}

#[async_trait]
impl Node for ReapplyWeightNode {
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
    name == "out"
  }

  async fn execute(&self, mut inputs: InputStreams) -> Result<OutputStreams, NodeExecutionError> {
    let in_stream = inputs.remove("in").ok_or("Missing 'in' input")?;
    let (out_tx, out_rx) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
      use futures::StreamExt;
      let mut s = in_stream;
      while let Some(item) = s.next().await {
        let input = match item.downcast::<ReapplyWeightInput>() {
          Ok(arc) => (*arc).clone(),
          Err(_) => continue,
        };
        let _ = out_tx
          .send(Arc::new(reapply_weight(&input)) as AnyItem)
          .await;
      }
    });

    let mut outputs = HashMap::new();
    outputs.insert("out".to_string(), port_stream(out_rx));
    Ok(outputs)
  }
}

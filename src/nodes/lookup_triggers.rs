//! Look up a LoRA's trigger phrases through the model catalog.

use crate::catalog::ModelCatalog;
use crate::node::{AnyItem, InputStreams, Node, NodeExecutionError, OutputStreams, port_stream};
use crate::types::LoraField;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Input for LookupTriggersNode.
#[derive(Debug, Clone)]
pub struct LookupTriggersInput {
  pub lora: LoraField,
}

/// Output: the LoRA's trigger phrases. A LoRA without phrases yields a
/// single empty string so downstream prompt joins stay well-formed.
#[derive(Debug, Clone)]
pub struct LookupTriggersOutput {
  pub trigger_words: Vec<String>,
}

/// Node that resolves trigger phrases for each incoming LoRA, routing
/// unknown keys to the `error` port.
pub struct LookupTriggersNode {
  /// Node display name.
  name: String,
  input_ports: Vec<String>,
  output_ports: Vec<String>,
  catalog: Arc<dyn ModelCatalog>,
}

impl LookupTriggersNode {
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
impl Node for LookupTriggersNode {
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
        let input = match item.downcast::<LookupTriggersInput>() {
          Ok(arc) => (*arc).clone(),
          Err(_) => {
            let _ = err_tx
              .send(Arc::new("Expected LookupTriggersInput".to_string()) as AnyItem)
              .await;
            continue;
          }
        };
        match catalog.trigger_phrases(&input.lora.lora.key) {
          Ok(phrases) => {
            let trigger_words = if phrases.is_empty() {
              vec![String::new()]
            } else {
              phrases
            };
            let _ = out_tx
              .send(Arc::new(LookupTriggersOutput { trigger_words }) as AnyItem)
              .await;
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

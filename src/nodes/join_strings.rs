//! Join a string collection with a delimiter, optionally escaping
//! delimiter occurrences inside items so the join stays invertible.

use crate::delimited;
use crate::node::{AnyItem, InputStreams, Node, NodeExecutionError, OutputStreams, port_stream};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Input for JoinStringsNode.
#[derive(Debug, Clone)]
pub struct JoinStringsInput {
  pub collection: Vec<String>,
  pub delimiter: String,
  /// Escape delimiter occurrences inside items before joining.
  pub escape: bool,
}

impl Default for JoinStringsInput {
  fn default() -> Self {
    Self {
      collection: Vec::new(),
      delimiter: delimited::DEFAULT_DELIMITER.to_string(),
      escape: false,
    }
  }
}

/// Output: the joined string.
#[derive(Debug, Clone)]
pub struct JoinStringsOutput {
  pub result: String,
}

pub(crate) fn join_strings(input: &JoinStringsInput) -> JoinStringsOutput {
  JoinStringsOutput {
    result: delimited::join(&input.collection, &input.delimiter, input.escape),
  }
}

/// Node that joins each incoming string collection.
pub struct JoinStringsNode {
  /// Node display name.
  name: String,
  input_ports: Vec<String>,
  output_ports: Vec<String>,
}

impl JoinStringsNode {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      input_ports: vec!["in".to_string()],
      output_ports: vec!["out".to_string()],
    }
  }
}

#[async_trait]
impl Node for JoinStringsNode {
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
        let input = match item.downcast::<JoinStringsInput>() {
          Ok(arc) => (*arc).clone(),
          Err(_) => continue,
        };
        let _ = out_tx.send(Arc::new(join_strings(&input)) as AnyItem).await;
      }
    });

    let mut outputs = HashMap::new();
    outputs.insert("out".to_string(), port_stream(out_rx));
    Ok(outputs)
  }
}

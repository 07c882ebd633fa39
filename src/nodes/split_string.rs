//! Split a delimited string back into a collection, optionally
//! recognizing backslash-escaped delimiters as literal content.

use crate::delimited;
use crate::node::{AnyItem, InputStreams, Node, NodeExecutionError, OutputStreams, port_stream};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Input for SplitStringNode.
#[derive(Debug, Clone)]
pub struct SplitStringInput {
  pub text: String,
  pub delimiter: String,
  /// Treat `\` + delimiter as a literal delimiter inside a part.
  pub unescape: bool,
}

impl Default for SplitStringInput {
  fn default() -> Self {
    Self {
      text: String::new(),
      delimiter: delimited::DEFAULT_DELIMITER.to_string(),
      unescape: false,
    }
  }
}

/// Output: the split parts. Always one more part than unescaped
/// delimiter occurrences.
#[derive(Debug, Clone)]
pub struct SplitStringOutput {
  pub collection: Vec<String>,
}

pub(crate) fn split_string(input: &SplitStringInput) -> SplitStringOutput {
  SplitStringOutput {
    collection: delimited::split(&input.text, &input.delimiter, input.unescape),
  }
}

/// Node that splits each incoming string.
pub struct SplitStringNode {
  /// Node display name.
  name: String,
  input_ports: Vec<String>,
  output_ports: Vec<String>,
}

impl SplitStringNode {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      input_ports: vec!["in".to_string()],
      output_ports: vec!["out".to_string()],
    }
  }
}

#[async_trait]
impl Node for SplitStringNode {
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
        let input = match item.downcast::<SplitStringInput>() {
          Ok(arc) => (*arc).clone(),
          Err(_) => continue,
        };
        let _ = out_tx.send(Arc::new(split_string(&input)) as AnyItem).await;
      }
    });

    let mut outputs = HashMap::new();
    outputs.insert("out".to_string(), port_stream(out_rx));
    Ok(outputs)
  }
}

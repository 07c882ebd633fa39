//! Merge two LoRA collections into one. Either side may be a single
//! LoRA straight from a selector node or a full collection.

use crate::node::{AnyItem, InputStreams, Node, NodeExecutionError, OutputStreams, port_stream};
use crate::types::{LoraField, OneOrMany};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Input for MergeCollectionsNode.
#[derive(Debug, Clone)]
pub struct MergeCollectionsInput {
  pub collection1: OneOrMany<LoraField>,
  pub collection2: OneOrMany<LoraField>,
}

/// Output: collection1 followed by collection2.
#[derive(Debug, Clone)]
pub struct MergeCollectionsOutput {
  pub collection: Vec<LoraField>,
}

pub(crate) fn merge_collections(input: &MergeCollectionsInput) -> MergeCollectionsOutput {
  let mut collection = input.collection1.clone().into_vec();
  collection.extend(input.collection2.clone().into_vec());
  MergeCollectionsOutput { collection }
}

/// Node that merges each incoming pair of collections.
pub struct MergeCollectionsNode {
  /// Node display name.
  name: String,
  input_ports: Vec<String>,
  output_ports: Vec<String>,
}

impl MergeCollectionsNode {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      input_ports: vec!["in".to_string()],
      output_ports: vec!["out".to_string()],
    }
  }
}

#[async_trait]
impl Node for MergeCollectionsNode {
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
        let input = match item.downcast::<MergeCollectionsInput>() {
          Ok(arc) => (*arc).clone(),
          Err(_) => continue,
        };
        let _ = out_tx
          .send(Arc::new(merge_collections(&input)) as AnyItem)
          .await;
      }
    });

    let mut outputs = HashMap::new();
    outputs.insert("out".to_string(), port_stream(out_rx));
    Ok(outputs)
  }
}

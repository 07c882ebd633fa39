//! Tests for `join_strings`.

use std::collections::HashMap;
use std::sync::Arc;

use futures::StreamExt;

use crate::node::{AnyItem, InputStreams, Node};

use super::join_strings::{JoinStringsInput, JoinStringsNode, JoinStringsOutput, join_strings};

fn input_streams(items: Vec<AnyItem>) -> InputStreams {
  let (tx, rx) = tokio::sync::mpsc::channel(16);
  for item in items {
    tx.try_send(item).unwrap();
  }
  drop(tx);
  let mut inputs: InputStreams = HashMap::new();
  inputs.insert("in".to_string(), crate::node::port_stream(rx));
  inputs
}

#[test]
fn joins_with_default_delimiter() {
  let input = JoinStringsInput {
    collection: vec!["one".to_string(), "two".to_string()],
    ..JoinStringsInput::default()
  };
  assert_eq!(join_strings(&input).result, "one, two");
}

#[test]
fn escape_mode_protects_embedded_delimiters() {
  let input = JoinStringsInput {
    collection: vec!["a,b".to_string(), "c".to_string()],
    delimiter: ",".to_string(),
    escape: true,
  };
  assert_eq!(join_strings(&input).result, "a\\,b,c");
}

#[tokio::test]
async fn node_execute_joins() {
  let node = JoinStringsNode::new("join");
  let input = JoinStringsInput {
    collection: vec!["x".to_string(), "y".to_string()],
    delimiter: "-".to_string(),
    escape: false,
  };
  let mut outputs = node
    .execute(input_streams(vec![Arc::new(input) as AnyItem]))
    .await
    .unwrap();
  let mut out = outputs.remove("out").unwrap();
  let item = out.next().await.unwrap();
  let result = item.downcast::<JoinStringsOutput>().unwrap();
  assert_eq!(result.result, "x-y");
}

#[tokio::test]
async fn node_execute_skips_wrong_type() {
  let node = JoinStringsNode::new("join");
  let mut outputs = node
    .execute(input_streams(vec![Arc::new(17_u32) as AnyItem]))
    .await
    .unwrap();
  let mut out = outputs.remove("out").unwrap();
  assert!(out.next().await.is_none());
}

#[test]
fn node_trait_methods() {
  let mut node = JoinStringsNode::new("join");
  assert_eq!(node.name(), "join");
  node.set_name("joiner");
  assert_eq!(node.name(), "joiner");
  assert!(node.has_input_port("in"));
  assert!(node.has_output_port("out"));
}

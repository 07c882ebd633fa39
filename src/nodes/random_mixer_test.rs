//! Tests for `random_mixer`.

use std::collections::HashMap;
use std::sync::Arc;

use futures::StreamExt;

use crate::catalog::InMemoryCatalog;
use crate::node::{AnyItem, InputStreams, Node};
use crate::types::LoraField;

use super::random_mixer::{RandomMixerInput, RandomMixerNode, RandomMixerOutput, run_mixer};

fn lora(name: &str) -> LoraField {
  LoraField::new(format!("key-{name}"), name, 0.0)
}

fn catalog() -> InMemoryCatalog {
  let mut catalog = InMemoryCatalog::new();
  catalog.insert("key-a", vec!["trigger a".to_string()]);
  catalog.insert("key-b", vec!["trigger b1".to_string(), "trigger b2".to_string()]);
  catalog.insert("key-c", vec![]);
  catalog
}

fn input(seed: i64) -> RandomMixerInput {
  RandomMixerInput {
    loras: vec![lora("a"), lora("b"), lora("c")],
    seed,
    ..RandomMixerInput::default()
  }
}

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
fn seeded_run_is_reproducible() {
  let catalog = catalog();
  let first = run_mixer(&input(42), &catalog).unwrap();
  let second = run_mixer(&input(42), &catalog).unwrap();
  assert_eq!(first.loras, second.loras);
  assert_eq!(first.lora_names, second.lora_names);
  assert_eq!(first.trigger_words, second.trigger_words);
}

#[test]
fn unseeded_run_stays_within_bounds() {
  let result = run_mixer(&input(-1), &catalog()).unwrap();
  assert!((1..=3).contains(&result.loras.len()));
}

#[test]
fn lora_names_use_their_own_delimiter() {
  let mixer_input = RandomMixerInput {
    min_loras: 2,
    max_loras: 2,
    trigger_word_delimiter: " + ".to_string(),
    lora_names_delimiter: " | ".to_string(),
    ..input(7)
  };
  let result = run_mixer(&mixer_input, &catalog()).unwrap();
  assert_eq!(result.lora_names.matches(" | ").count(), 1);
  assert!(!result.lora_names.contains(" + "));
}

#[test]
fn trigger_words_collect_phrases_of_selected_loras() {
  let mixer_input = RandomMixerInput {
    loras: vec![lora("b")],
    min_loras: 1,
    max_loras: 1,
    ..input(1)
  };
  let result = run_mixer(&mixer_input, &catalog()).unwrap();
  assert_eq!(result.trigger_words, "trigger b1, trigger b2");
}

#[test]
fn lora_without_phrases_contributes_nothing() {
  let mixer_input = RandomMixerInput {
    loras: vec![lora("c")],
    min_loras: 1,
    max_loras: 1,
    ..input(1)
  };
  let result = run_mixer(&mixer_input, &catalog()).unwrap();
  assert_eq!(result.trigger_words, "");
}

#[test]
fn unknown_model_key_fails() {
  let mixer_input = RandomMixerInput {
    loras: vec![lora("zz")],
    min_loras: 1,
    max_loras: 1,
    ..input(1)
  };
  let err = run_mixer(&mixer_input, &catalog()).unwrap_err();
  assert!(err.to_string().contains("key-zz"));
}

#[test]
fn insufficient_loras_fails() {
  let mixer_input = RandomMixerInput {
    loras: vec![lora("a")],
    min_loras: 2,
    ..input(1)
  };
  let err = run_mixer(&mixer_input, &catalog()).unwrap_err();
  assert!(err.to_string().contains("[1]"));
  assert!(err.to_string().contains("[2]"));
}

#[tokio::test]
async fn node_execute_mixes() {
  let node = RandomMixerNode::new("mixer", Arc::new(catalog()));
  let inputs = input_streams(vec![Arc::new(input(42)) as AnyItem]);
  let mut outputs = node.execute(inputs).await.unwrap();
  let mut out = outputs.remove("out").unwrap();
  let item = out.next().await.unwrap();
  let result = item.downcast::<RandomMixerOutput>().unwrap();
  assert!((1..=3).contains(&result.loras.len()));
}

#[tokio::test]
async fn node_routes_failures_to_error_port() {
  let node = RandomMixerNode::new("mixer", Arc::new(catalog()));
  let failing = RandomMixerInput {
    loras: vec![],
    min_loras: 1,
    ..RandomMixerInput::default()
  };
  let inputs = input_streams(vec![Arc::new(failing) as AnyItem]);
  let mut outputs = node.execute(inputs).await.unwrap();
  let mut err = outputs.remove("error").unwrap();
  let item = err.next().await.unwrap();
  let message = item.downcast::<String>().unwrap();
  assert!(message.contains("minimum LoRAs value"));
  let mut out = outputs.remove("out").unwrap();
  assert!(out.next().await.is_none());
}

#[tokio::test]
async fn node_reports_wrong_input_type() {
  let node = RandomMixerNode::new("mixer", Arc::new(catalog()));
  let inputs = input_streams(vec![Arc::new(false) as AnyItem]);
  let mut outputs = node.execute(inputs).await.unwrap();
  let mut err = outputs.remove("error").unwrap();
  let item = err.next().await.unwrap();
  let message = item.downcast::<String>().unwrap();
  assert!(message.contains("Expected RandomMixerInput"));
}

#[tokio::test]
async fn node_requires_the_in_port() {
  let node = RandomMixerNode::new("mixer", Arc::new(catalog()));
  let result = node.execute(HashMap::new()).await;
  assert!(result.is_err());
}

#[test]
fn node_trait_methods() {
  let mut node = RandomMixerNode::new("mixer", Arc::new(catalog()));
  assert_eq!(node.name(), "mixer");
  node.set_name("random");
  assert_eq!(node.name(), "random");
  assert!(node.has_input_port("in"));
  assert!(node.has_output_port("out"));
  assert!(node.has_output_port("error"));
  assert!(!node.has_output_port("other"));
}

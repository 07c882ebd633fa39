//! Host execution seam: nodes consume and produce streams of
//! type-erased items keyed by port name. The graph executor owns
//! wiring, scheduling, and caching; a node only maps its input stream
//! to output streams.

use async_trait::async_trait;
use futures::Stream;
use std::any::Any;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::Receiver;
use tokio_stream::wrappers::ReceiverStream;

/// A single item flowing between nodes.
pub type AnyItem = Arc<dyn Any + Send + Sync>;

/// Streams of items keyed by input port name.
pub type InputStreams = HashMap<String, Pin<Box<dyn Stream<Item = AnyItem> + Send>>>;

/// Streams of items keyed by output port name.
pub type OutputStreams = HashMap<String, Pin<Box<dyn Stream<Item = AnyItem> + Send>>>;

/// Failure to set up a node execution (e.g. a required port is not
/// connected). Per-item failures are routed to an `error` port instead.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct NodeExecutionError(pub String);

impl From<&str> for NodeExecutionError {
  fn from(msg: &str) -> Self {
    Self(msg.to_string())
  }
}

impl From<String> for NodeExecutionError {
  fn from(msg: String) -> Self {
    Self(msg)
  }
}

/// Wraps a channel receiver as a boxed output port stream.
pub fn port_stream(rx: Receiver<AnyItem>) -> Pin<Box<dyn Stream<Item = AnyItem> + Send>> {
  Box::pin(ReceiverStream::new(rx))
}

/// A leaf computation the host graph executor can drive.
#[async_trait]
pub trait Node: Send + Sync {
  fn name(&self) -> &str;

  fn set_name(&mut self, name: &str);

  fn input_port_names(&self) -> &[String];

  fn output_port_names(&self) -> &[String];

  fn has_input_port(&self, name: &str) -> bool;

  fn has_output_port(&self, name: &str) -> bool;

  /// Consumes the input streams and returns the output streams. The
  /// returned streams stay live until the inputs are exhausted.
  async fn execute(&self, inputs: InputStreams) -> Result<OutputStreams, NodeExecutionError>;
}

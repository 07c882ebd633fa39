//! # lora-mixer
//!
//! Leaf invocation nodes for a node-based image-generation host:
//! random constrained LoRA selection with freshly sampled weights, and
//! an escape-aware delimited join/split for prompt fragments.
//!
//! ## Architecture
//!
//! The algorithmic cores are plain synchronous functions (`mixer`,
//! `delimited`); the `nodes` module wraps each as an async [`Node`]
//! the host's stream executor can drive. The host owns graph
//! execution, caching, and model loading; lookups against its model
//! manager go through the [`ModelCatalog`] seam.

pub mod catalog;
pub mod delimited;
pub mod mixer;
pub mod node;
pub mod nodes;
pub mod types;

pub use catalog::{InMemoryCatalog, ModelCatalog, UnknownModelError};
pub use delimited::{DEFAULT_DELIMITER, join, split};
pub use mixer::{Mix, MixError, mix, mix_with_rng};
pub use node::{InputStreams, Node, NodeExecutionError, OutputStreams};
pub use types::{LoraField, LoraRef, MixRequest, OneOrMany};

//! Typed records exchanged with the host.
//!
//! These flow through the node graph as `Arc<dyn Any>`; hosts may also
//! serialize them, so the data types carry serde derives.

mod lora_field;
mod mix_request;
#[cfg(test)]
mod mix_request_test;
mod one_or_many;

pub use lora_field::{LoraField, LoraRef};
pub use mix_request::MixRequest;
pub use one_or_many::OneOrMany;

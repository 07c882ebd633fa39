//! Scalar-or-collection input field.

use serde::{Deserialize, Serialize};

/// A field that accepts either a single value or a collection of
/// values, normalized with [`OneOrMany::into_vec`]. Serialized
/// untagged, so hosts can wire a scalar output straight into a
/// collection input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
  One(T),
  Many(Vec<T>),
}

impl<T> OneOrMany<T> {
  pub fn into_vec(self) -> Vec<T> {
    match self {
      OneOrMany::One(value) => vec![value],
      OneOrMany::Many(values) => values,
    }
  }

  pub fn len(&self) -> usize {
    match self {
      OneOrMany::One(_) => 1,
      OneOrMany::Many(values) => values.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

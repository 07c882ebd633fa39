//! Invocation nodes wrapping the mixer and codec cores.

mod join_strings;
#[cfg(test)]
mod join_strings_test;
mod lookup_triggers;
mod merge_collections;
mod random_mixer;
#[cfg(test)]
mod random_mixer_test;
mod reapply_weight;
mod split_string;

pub use join_strings::{JoinStringsInput, JoinStringsNode, JoinStringsOutput};
pub use lookup_triggers::{LookupTriggersInput, LookupTriggersNode, LookupTriggersOutput};
pub use merge_collections::{MergeCollectionsInput, MergeCollectionsNode, MergeCollectionsOutput};
pub use random_mixer::{RandomMixerError, RandomMixerInput, RandomMixerNode, RandomMixerOutput};
pub use reapply_weight::{ReapplyWeightInput, ReapplyWeightNode, ReapplyWeightOutput};
pub use split_string::{SplitStringInput, SplitStringNode, SplitStringOutput};

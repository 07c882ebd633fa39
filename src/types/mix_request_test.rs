//! Tests for `mix_request`.

use super::mix_request::MixRequest;

#[test]
fn defaults_mirror_the_host_node() {
  let req = MixRequest::default();
  assert!(req.loras.is_empty());
  assert_eq!(req.seed, None);
  assert_eq!(req.min_loras, 1);
  assert_eq!(req.max_loras, 3);
  assert_eq!(req.min_weight, 0.05);
  assert_eq!(req.max_weight, 1.0);
}

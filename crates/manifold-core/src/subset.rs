//! Structural subset predicate over untyped document trees.

use serde_yaml::Value;

/// Returns true when every piece of `required` is present in `candidate`.
///
/// - Mappings: every required key must exist in the candidate with a
///   subset-compatible value; extra candidate keys are ignored.
/// - Sequences: equal length, compared positionally.
/// - Scalars: plain equality (same type and value).
/// - Mixed kinds never match.
pub fn is_subset(required: &Value, candidate: &Value) -> bool {
    match (required, candidate) {
        (Value::Mapping(req), Value::Mapping(cand)) => req
            .iter()
            .all(|(key, value)| cand.get(key).map_or(false, |c| is_subset(value, c))),
        (Value::Mapping(_), _) => false,
        (Value::Sequence(req), Value::Sequence(cand)) => {
            req.len() == cand.len() && req.iter().zip(cand.iter()).all(|(r, c)| is_subset(r, c))
        }
        (Value::Sequence(_), _) => false,
        (required, candidate) => required == candidate,
    }
}

//! Small helpers shared by the per-platform normalizers.

use serde_json::Value;

/// Count occurrences of each item, keeping first-seen order.
///
/// Paired with a stable sort this gives deterministic tie ordering.
pub(crate) fn tally<I, S>(items: I) -> Vec<(String, u32)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: Vec<(String, u32)> = Vec::new();
    for item in items {
        let item = item.as_ref();
        match counts.iter_mut().find(|(name, _)| name == item) {
            Some((_, n)) => *n += 1,
            None => counts.push((item.to_string(), 1)),
        }
    }
    counts
}

/// Sort tallies descending by count. Ties keep first-seen order.
pub(crate) fn sort_by_count_desc(counts: &mut [(String, u32)]) {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
}

/// Read a non-negative count from `value`, accepting JSON numbers and
/// numeric strings. Fractions are truncated; anything else reads as `0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // positive, truncated on purpose
pub(crate) fn coerce_count(value: &Value) -> u32 {
    let n = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f.trunc() as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| *f > 0.0).map(|f| f.trunc() as u64))
        }
        _ => None,
    };
    n.map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
}

/// First non-zero count among `keys` of `object`, or `0`.
pub(crate) fn first_nonzero(object: &Value, keys: &[&str]) -> u32 {
    keys.iter()
        .filter_map(|key| object.get(key))
        .map(coerce_count)
        .find(|n| *n > 0)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tally_keeps_first_seen_order() {
        let counts = tally(["Rust", "Go", "Rust", "Python"]);
        assert_eq!(
            counts,
            vec![
                ("Rust".to_string(), 2),
                ("Go".to_string(), 1),
                ("Python".to_string(), 1)
            ]
        );
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut counts = tally(["a", "b", "c", "c"]);
        sort_by_count_desc(&mut counts);
        let names: Vec<&str> = counts.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn coerce_count_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_count(&json!(42)), 42);
        assert_eq!(coerce_count(&json!("17")), 17);
        assert_eq!(coerce_count(&json!(" 8 ")), 8);
        assert_eq!(coerce_count(&json!(3.9)), 3);
    }

    #[test]
    fn coerce_count_rejects_other_shapes() {
        assert_eq!(coerce_count(&json!(null)), 0);
        assert_eq!(coerce_count(&json!("n/a")), 0);
        assert_eq!(coerce_count(&json!(-5)), 0);
        assert_eq!(coerce_count(&json!([1])), 0);
    }

    #[test]
    fn first_nonzero_skips_zero_and_missing_keys() {
        let object = json!({ "Easy": 0, "school": "12" });
        assert_eq!(first_nonzero(&object, &["Easy", "school"]), 12);
        assert_eq!(first_nonzero(&object, &["Hard"]), 0);
    }
}

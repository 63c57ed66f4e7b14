use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

/// Normalized result of a route search: the path found, the nodes visited
/// while searching, and the total cost.
///
/// A `SearchOutcome` always holds arrays and a finite cost; `Default` is the
/// empty outcome `{path: [], visited: [], cost: 0}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub path: Vec<Value>,
    pub visited: Vec<Value>,
    pub cost: f64,
}

/// Normalize a raw engine result into a [`SearchOutcome`].
///
/// Total over any JSON value and never panics. A non-object input is logged
/// and replaced with the default outcome. For object input, each of `path`,
/// `visited` and `cost` is taken verbatim when well-typed and defaulted
/// otherwise, independently of the other fields; extra keys are ignored.
pub fn normalize(raw: &Value) -> SearchOutcome {
    let Some(map) = raw.as_object() else {
        error!("Search result is not an object: {}", raw);
        return SearchOutcome::default();
    };

    let path = map
        .get("path")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let visited = map
        .get("visited")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let cost = map
        .get("cost")
        .and_then(Value::as_f64)
        .filter(|c| c.is_finite())
        .unwrap_or(0.0);

    SearchOutcome {
        path,
        visited,
        cost,
    }
}

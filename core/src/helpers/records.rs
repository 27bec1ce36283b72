use serde_json::Value;
use std::cmp::Ordering;

/// `value` unless it is absent or empty, otherwise `default`.
pub fn value_or_default(value: Option<&str>, default: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => default.map(str::to_string),
    }
}

/// Deep inequality. Object key order is irrelevant.
pub fn is_diff(a: &Value, b: &Value) -> bool {
    a != b
}

/// Stable sort of records by `fields`, first field first.
///
/// Numbers sort numerically, strings lexicographically, `false` before `true`.
/// Across types: numbers, strings, booleans, then everything else; missing
/// fields and nulls always sort last. `reverse` flips the finished order.
pub fn sort_records(data: &[Value], fields: &[&str], reverse: bool) -> Vec<Value> {
    let mut out = data.to_vec();
    out.sort_by(|a, b| {
        fields
            .iter()
            .map(|f| compare_field(a.get(*f), b.get(*f)))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    if reverse {
        out.reverse();
    }
    out
}

fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => compare_values(a, b),
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Number(_) => 0,
        Value::String(_) => 1,
        Value::Bool(_) => 2,
        Value::Array(_) => 3,
        Value::Object(_) => 4,
        Value::Null => 5,
    }
}

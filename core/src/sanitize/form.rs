use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_HIDDEN_PREFIX: &str = "_";
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Keys starting with this prefix are UI-only and never leave the sanitizer.
    pub hidden_prefix: String,
    /// Maximum number of nested records/sequences below the top-level record.
    pub max_depth: usize,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            hidden_prefix: DEFAULT_HIDDEN_PREFIX.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Whitespace as ECMAScript `String.prototype.trim` sees it: Unicode
/// White_Space without NEL (U+0085), plus the byte-order mark (U+FEFF).
pub fn is_form_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

pub fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.chars().all(is_form_whitespace))
}

pub fn clean_form_values(data: &Value) -> CoreResult<Value> {
    clean_form_values_with(data, &SanitizeOptions::default())
}

// Rules, applied at every depth:
// - keys starting with the hidden prefix are dropped
// - blank (empty or whitespace-only) strings become null
// - records are cleaned recursively, including records inside sequences
// - numbers, booleans and null pass through untouched
pub fn clean_form_values_with(data: &Value, opts: &SanitizeOptions) -> CoreResult<Value> {
    match data {
        Value::Object(map) => Ok(Value::Object(clean_form_map(map, opts)?)),
        other => Err(CoreError::InvalidArgument(format!(
            "form values must be an object, got {}",
            kind_of(other)
        ))),
    }
}

pub fn clean_form_map(
    map: &Map<String, Value>,
    opts: &SanitizeOptions,
) -> CoreResult<Map<String, Value>> {
    clean_map(map, opts, 0)
}

fn clean_map(
    map: &Map<String, Value>,
    opts: &SanitizeOptions,
    depth: usize,
) -> CoreResult<Map<String, Value>> {
    let mut out = Map::new();
    let mut hidden = 0usize;
    for (k, v) in map {
        if k.starts_with(opts.hidden_prefix.as_str()) {
            hidden += 1;
            continue;
        }
        out.insert(k.clone(), clean_value(v, opts, depth)?);
    }
    if hidden > 0 {
        tracing::debug!(depth, hidden, kept = out.len(), "stripped hidden form keys");
    }
    Ok(out)
}

fn clean_value(v: &Value, opts: &SanitizeOptions, depth: usize) -> CoreResult<Value> {
    match v {
        Value::Object(map) => Ok(Value::Object(clean_map(map, opts, descend(depth, opts)?)?)),
        Value::Array(arr) => {
            let next = descend(depth, opts)?;
            let mut out = Vec::with_capacity(arr.len());
            for vv in arr {
                out.push(clean_value(vv, opts, next)?);
            }
            Ok(Value::Array(out))
        }
        other if is_empty_string(other) => Ok(Value::Null),
        other => Ok(other.clone()),
    }
}

fn descend(depth: usize, opts: &SanitizeOptions) -> CoreResult<usize> {
    let next = depth + 1;
    if next > opts.max_depth {
        tracing::warn!(max_depth = opts.max_depth, "form values nested too deeply");
        return Err(CoreError::StructureTooDeep {
            max_depth: opts.max_depth,
        });
    }
    Ok(next)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

use std::collections::BTreeMap;
use url::form_urlencoded;

// Separator used when a key appears more than once.
pub const MULTI_VALUE_SEPARATOR: &str = ";";

/// Parses a URL query string into a sorted key map.
///
/// - a leading `?` or `#` is ignored
/// - `+` and percent escapes are decoded
/// - a key with no `=` maps to `None`
/// - repeated keys are joined with `;` in order of appearance
pub fn url_get_params(input: &str) -> BTreeMap<String, Option<String>> {
    let trimmed = input.trim().trim_start_matches(&['?', '#'][..]);

    let mut grouped: BTreeMap<String, Vec<Option<String>>> = BTreeMap::new();
    for piece in trimmed.split('&').filter(|p| !p.is_empty()) {
        let Some((key, value)) = form_urlencoded::parse(piece.as_bytes()).next() else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        let value = piece.contains('=').then(|| value.into_owned());
        grouped.entry(key.into_owned()).or_default().push(value);
    }

    grouped
        .into_iter()
        .map(|(k, mut values)| {
            let joined = if values.len() == 1 {
                values.pop().flatten()
            } else {
                Some(
                    values
                        .into_iter()
                        .map(Option::unwrap_or_default)
                        .collect::<Vec<_>>()
                        .join(MULTI_VALUE_SEPARATOR),
                )
            };
            (k, joined)
        })
        .collect()
}

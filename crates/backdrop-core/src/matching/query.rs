//! Query string parsing with percent-decoding.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Parse a query string into a key/value map.
///
/// Keys and values are percent-decoded; a pair without `=` maps to an
/// empty value; repeated keys accumulate comma-joined; empty pairs from
/// stray separators are skipped.
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    let mut params: HashMap<String, String> = HashMap::new();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(raw_key);
        let value = decode(raw_value);

        match params.entry(key) {
            Entry::Occupied(mut slot) => {
                let joined = slot.get_mut();
                joined.push(',');
                joined.push_str(&value);
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }

    params
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_owned())
}

use std::collections::BTreeMap;

/// How to treat a `key=value` entry that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MalformedEntries {
    /// Fail on the entry. Values may contain `=`.
    Reject,
    /// Drop the entry. An entry with more than one `=` is malformed.
    Skip,
}

/// Splits `key=value<sep>key=value` into a header map. Later duplicates
/// replace earlier ones. Returns the offending entry on rejection.
pub(crate) fn parse_header_pairs(
    raw: &str,
    separator: char,
    malformed: MalformedEntries,
) -> Result<BTreeMap<String, String>, String> {
    let mut headers = BTreeMap::new();
    for entry in raw.split(separator) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let parsed = entry
            .split_once('=')
            .filter(|(_, value)| malformed == MalformedEntries::Reject || !value.contains('='))
            .map(|(key, value)| (key.trim(), value.trim()))
            .filter(|(key, _)| !key.is_empty());
        match (parsed, malformed) {
            (Some((key, value)), _) => {
                headers.insert(key.to_owned(), value.to_owned());
            }
            (None, MalformedEntries::Skip) => {}
            (None, MalformedEntries::Reject) => return Err(entry.to_owned()),
        }
    }
    Ok(headers)
}

//! Symbol universe cleaning.

use std::collections::HashSet;

/// Normalise raw ticker strings into the panel universe.
///
/// Each entry is trimmed and `.` is replaced with `-`; only purely
/// alphabetic tickers are kept, so share-class tickers such as `BRK.B`
/// drop out. Duplicates keep their first position.
pub fn clean_symbols<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|s| s.as_ref().trim().replace('.', "-"))
        .filter(|s| !s.is_empty() && s.chars().all(char::is_alphabetic))
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

//! Input normalization: lowercase, trim, drop blanks, sort, deduplicate.

/// Normalize raw domain strings.
///
/// Sorting is plain byte order (not locale or label aware) so output is
/// reproducible across platforms.
pub fn normalize<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = raw
        .into_iter()
        .filter_map(|s| {
            let s = s.as_ref().trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_lowercase())
            }
        })
        .collect();

    out.sort_unstable();
    out.dedup();
    out
}

/// Normalize wildcard entries, dropping a leading `*.` or `.` marker.
pub fn normalize_wildcard<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    normalize(
        raw.into_iter()
            .map(|s| strip_wildcard_marker(s.as_ref()).to_string()),
    )
}

/// `*.x.com` and `.x.com` both name the root `x.com`.
pub(crate) fn strip_wildcard_marker(entry: &str) -> &str {
    let entry = entry.trim();
    entry
        .strip_prefix("*.")
        .or_else(|| entry.strip_prefix('.'))
        .unwrap_or(entry)
}

/// Sort and deduplicate an already-normalized list in place.
pub(crate) fn sort_dedup(list: &mut Vec<String>) {
    list.sort_unstable();
    list.dedup();
}

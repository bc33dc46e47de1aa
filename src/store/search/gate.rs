/// Minimum-length gate a view applies before issuing a search.
///
/// Length is counted in characters after trimming surrounding whitespace.
pub fn should_search(query: &str, min_len: usize) -> bool {
    query.trim().chars().count() >= min_len
}

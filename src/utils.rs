/// Truncates a string for log output, appending "..." when cut.
///
/// Cuts at the nearest char boundary at or below `max` bytes.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

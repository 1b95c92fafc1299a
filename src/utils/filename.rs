const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Checks a user supplied base file name. Names are resolved inside the
/// data directory, so separators and parent references are refused.
pub fn is_valid_base_name(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return false;
    }
    !name.chars().any(|c| c.is_control() || FORBIDDEN.contains(&c))
}

//! Hygiene for text typed into the interactive shell.

/// Characters refused in product IDs, which end up in file content and log lines.
pub const FORBIDDEN_ID_CHARS: [char; 11] = ['<', '>', '"', '\'', '&', ';', '(', ')', '|', '`', '$'];

/// Strips control characters, trims, and truncates to `max_len` characters.
pub fn sanitize(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .chars()
        .take(max_len)
        .collect()
}

/// `true` if `id` contains none of [`FORBIDDEN_ID_CHARS`].
pub fn is_safe_id(id: &str) -> bool {
    !id.contains(FORBIDDEN_ID_CHARS)
}

/// Interprets a yes/no answer; anything unrecognised counts as "no".
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

/// Lowercases, drops punctuation, turns whitespace runs into single dashes
/// and trims dangling dashes. Used for review page filenames.
pub fn slugify(text: &str, max_length: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_dash = false;

    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
            last_dash = false;
        } else if c.is_whitespace() || c == '-' {
            if !last_dash && !out.is_empty() {
                out.push('-');
                last_dash = true;
            }
        }
    }

    let truncated: String = out.chars().take(max_length).collect();
    truncated.trim_matches('-').to_string()
}

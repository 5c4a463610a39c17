/// Parse and validate a pass-through argument.
///
/// Accepts `key=value` or a bare `key` (a flag). Keys must start with a
/// letter and contain only letters, digits, `-` or `_`.
///
/// # Errors
///
/// Returns an error message if the key is empty or malformed.
pub fn parse_argv_pair(s: &str) -> Result<String, String> {
    let key = s.split_once('=').map_or(s, |(key, _)| key);

    let Some(first) = key.chars().next() else {
        return Err(format!("Argument key cannot be empty: '{s}'"));
    };

    if !first.is_ascii_alphabetic() {
        return Err(format!("Argument key must start with a letter: '{s}'"));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "Argument key can only contain letters, numbers, '-' or '_': '{s}'"
        ));
    }

    Ok(s.to_string())
}

/// Quote a value for a POSIX shell command line.
///
/// Values made only of characters the shell never interprets are returned
/// unchanged so generated scripts stay readable.
pub fn shell_quote(value: &str) -> String {
    let safe = !value.is_empty()
        && value.chars().all(|c| c.is_ascii_alphanumeric() || "/._-+:,@%".contains(c));
    if safe {
        return value.to_string();
    }
    format!("'{}'", value.replace('\'', r"'\''"))
}

//! Doc comment cleanup and the export convention

/// Whether an identifier is visible outside its package
///
/// Exported names start with an upper-case letter; digits, underscores and
/// lower-case letters all make a name package-private.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Clean a raw doc comment for display
///
/// Line endings are unified, every line is trimmed, blank lines are dropped
/// and the rest is joined with `\n`. Applying it twice changes nothing.
pub fn normalize_doc(doc: &str) -> String {
    let doc = doc.trim();
    if doc.is_empty() {
        return String::new();
    }

    let unified = doc.replace("\r\n", "\n").replace('\r', "\n");

    unified
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

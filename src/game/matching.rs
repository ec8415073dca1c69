//! Guess normalization
//!
//! A guess matches when it equals the answer after trimming and
//! lower-casing, or when both agree once everything outside `[a-z0-9]` is
//! dropped. The second form is what lets "spiderman" match "Spider-Man".

/// Trimmed, lower-cased form
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Normalized form with every character outside `[a-z0-9]` removed
pub fn strip(text: &str) -> String {
    normalize(text)
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Does `guess` name `answer`?
pub fn is_match(guess: &str, answer: &str) -> bool {
    let guess_norm = normalize(guess);
    if guess_norm.is_empty() {
        return false;
    }
    if guess_norm == normalize(answer) {
        return true;
    }

    // Two all-symbol strings strip to "", which is not a match.
    let guess_stripped = strip(guess);
    !guess_stripped.is_empty() && guess_stripped == strip(answer)
}

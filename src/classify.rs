/// Keyword that ends the session when it is the entire raw line.
pub const QUIT_KEYWORD: &str = "end";

/// First non-whitespace character of a comment line.
pub const COMMENT_MARKER: char = '#';

/// What the shell should do with one line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Stop the session. No evaluation, no further prompt.
    Terminate,
    /// Nothing to evaluate on this line; re-prompt.
    Skip,
    /// A candidate statement; the raw text goes to the engine.
    Evaluate,
}

/// Classify one line of input.
///
/// The rules run in order and each one short-circuits the rest. The quit
/// keyword is compared against the raw line, while emptiness and the comment
/// marker are checked on the trimmed view, so `"end "` is a candidate
/// statement and `"   # note"` is a comment.
pub fn classify(raw: &str) -> Disposition {
    if raw == QUIT_KEYWORD {
        return Disposition::Terminate;
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Disposition::Skip;
    }
    if trimmed.starts_with(COMMENT_MARKER) {
        return Disposition::Skip;
    }

    Disposition::Evaluate
}

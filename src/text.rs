//! Soft-break translation between stored and displayed description text.
//!
//! The corpus service stores a reserved marker where a description may
//! break softly; editors see and type a single `|` instead. The folding is
//! deliberately lossy toward the marker: a literal `|`, a literal `\`, and
//! a raw soft-hyphen character in submitted text all become the marker, so
//! stored text never contains an ambiguous escape.

/// The marker sequence the corpus service stores for a soft line-break.
pub const SOFT_BREAK_MARKER: &str = "&shy;";

/// The character editors use in place of the marker.
pub const DISPLAY_BREAK: char = '|';

const SOFT_HYPHEN: char = '\u{AD}';

/// Translates stored description text for display: every marker becomes
/// [`DISPLAY_BREAK`].
#[must_use]
pub fn to_display(stored: &str) -> String {
    stored.replace(SOFT_BREAK_MARKER, "|")
}

/// Folds submitted description text into its stored form: soft hyphens,
/// `|` and `\` all become [`SOFT_BREAK_MARKER`].
#[must_use]
pub fn to_stored(submitted: &str) -> String {
    submitted
        .replace(SOFT_HYPHEN, SOFT_BREAK_MARKER)
        .replace(DISPLAY_BREAK, SOFT_BREAK_MARKER)
        .replace('\\', SOFT_BREAK_MARKER)
}

/// Normalizes pasted text for the description input: raw soft hyphens show
/// up as [`DISPLAY_BREAK`].
#[must_use]
pub fn fold_paste(pasted: &str) -> String {
    pasted.replace(SOFT_HYPHEN, "|")
}

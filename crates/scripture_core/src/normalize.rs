//! Verse text normalization.
//!
//! Rules are exact string replacements applied in table order. They cover
//! only the annotation kinds listed in [`RULES`]; anything else is left in
//! place and neutralised by the final angle-bracket escape.

/// Ordered `(pattern, replacement)` table.
///
/// The chapter-boundary rule matches a single known marker instance. Other
/// `<chapter .../>` markers are not removed and come out escaped.
pub const RULES: &[(&str, &str)] = &[
    // translator-supplied insertion
    (r#"<transChange type="added">"#, "["),
    ("</transChange>", "]"),
    // chapter boundary
    (r#"<chapter eID="gen30993" osisID="2Tim.1"/>"#, ""),
    // escape whatever markup is left
    ("<", "&lt;"),
    (">", "&gt;"),
];

/// Convert raw engine markup to display-safe text.
///
/// Total and deterministic. Idempotent on its own output since no rule
/// pattern can survive the escape step.
pub fn normalize(markup: &str) -> String {
    let text = RULES
        .iter()
        .fold(markup.to_owned(), |text, (pattern, replacement)| {
            text.replace(pattern, replacement)
        });
    text.trim().to_owned()
}

/// Clean recognized text before analysis.
/// Strips control characters, trims each line, collapses blank lines, and
/// keeps the punctuation that carries meaning in medical documents
/// (units, ranges, labels, signature underscores).
pub fn sanitize_recognized_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || matches!(
                    c,
                    '.' | ','
                        | ';'
                        | ':'
                        | '-'
                        | '/'
                        | '('
                        | ')'
                        | '['
                        | ']'
                        | '+'
                        | '='
                        | '%'
                        | '#'
                        | '@'
                        | '&'
                        | '\''
                        | '"'
                        | '!'
                        | '?'
                        | '<'
                        | '>'
                        | '*'
                        | '_'
                        | '°'
                        | '²'
                        | 'µ'
                        | '№'
                        | '«'
                        | '»'
                        | '\u{2013}' // En-dash –
                        | '\u{2014}' // Em-dash —
                )
        })
        .collect::<String>()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

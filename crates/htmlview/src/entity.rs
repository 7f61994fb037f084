//! Lenient HTML entity decoding.
//!
//! Covers the named entities that show up in practice plus numeric character
//! references. Anything unrecognized is passed through unchanged; no input
//! is a decode error.

/// Resolve a named entity (without `&`/`;`) to its character, if known
fn named_entity(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{00A0}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "mdash" => '—',
        "ndash" => '–',
        "bull" => '•',
        "hellip" => '…',
        _ => return None,
    };
    Some(ch)
}

/// Resolve a numeric reference body (`#39`, `#x27`) to its character
fn numeric_entity(body: &str) -> Option<char> {
    let digits = body.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse().ok()?
    };
    char::from_u32(code)
}

/// Decode HTML character entities in `raw`.
///
/// Unterminated or unknown sequences are emitted verbatim.
pub fn decode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        // An entity body is short; cap the scan so stray ampersands in long
        // text don't walk to the end of the string.
        let end = rest[1..]
            .char_indices()
            .take(10)
            .find(|(_, c)| *c == ';')
            .map(|(i, _)| i + 1);

        match end {
            Some(end) => {
                let body = &rest[1..end];
                match named_entity(body).or_else(|| numeric_entity(body)) {
                    Some(ch) => {
                        out.push(ch);
                        rest = &rest[end + 1..];
                    }
                    None => {
                        out.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

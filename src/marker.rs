//! Marker literals and the line-scanning helpers behind smart delete, list
//! continuation, and indentation.
//!
//! Everything here is pure string inspection; counts are in `char`s to match
//! the surface's char-based delete/commit operations.

/// One half of a bold marker pair.
pub const BOLD: &str = "**";
/// Italic marker.
pub const ITALIC: &str = "*";
/// Inline-code marker.
pub const CODE: &str = "`";
/// Unordered list item prefix.
pub const UNORDERED: &str = "- ";
/// First ordered list item prefix.
pub const ORDERED_FIRST: &str = "1. ";
/// Unchecked checkbox item prefix.
pub const CHECKBOX: &str = "- [ ] ";
/// One indentation step.
pub const INDENT_UNIT: &str = "    ";

/// List markers smart delete removes as a unit, longest first. The checkbox
/// marker appears with and without its trailing space.
const DELETABLE: [&str; 4] = [CHECKBOX, "- [ ]", ORDERED_FIRST, UNORDERED];

/// The kinds of list marker the keyboard inserts and continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarkerKind {
    Unordered,
    /// Digit-prefixed. Continuation increments the digit in place, single
    /// digits only.
    Ordered,
    Checkbox,
}

impl ListMarkerKind {
    /// The literal text committed when the marker key is pressed.
    pub fn literal(&self) -> &'static str {
        match self {
            ListMarkerKind::Unordered => UNORDERED,
            ListMarkerKind::Ordered => ORDERED_FIRST,
            ListMarkerKind::Checkbox => CHECKBOX,
        }
    }
}

/// Last line segment of `text`: everything after the final line break, or
/// the whole string when there is none.
pub fn last_line(text: &str) -> &str {
    text.rsplit('\n').next().unwrap_or(text)
}

/// Number of leading space characters in `line`.
pub fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}

/// The last `n` chars of `s` (all of it when shorter).
pub fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    let start = s
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &s[start..]
}

/// Increment the leading digit of an ordered marker in place: "3. " becomes
/// "4. ". When the first digit cannot be incremented without growing past a
/// single digit ("9. "), the marker is returned unchanged.
pub fn increment_ordered(marker: &str) -> String {
    let mut out = String::with_capacity(marker.len());
    let mut bumped = false;
    for c in marker.chars() {
        if !bumped && c.is_ascii_digit() {
            bumped = true;
            let d = c.to_digit(10).unwrap_or(0);
            if d < 9 {
                out.push(char::from_digit(d + 1, 10).unwrap_or(c));
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Continuation prefix for the line just completed by Enter: the line's
/// indentation rounded down to whole 4-space steps, plus the continued list
/// marker, if any. `None` when there is nothing to continue.
pub fn continuation_prefix(line: &str) -> Option<String> {
    let spaces = leading_spaces(line);
    let depth = spaces - spaces % INDENT_UNIT.len();
    let rest = &line[spaces..];

    let marker = if rest.starts_with(CHECKBOX) {
        Some(CHECKBOX.to_owned())
    } else if rest.starts_with(UNORDERED) {
        Some(UNORDERED.to_owned())
    } else {
        ordered_marker(rest).map(increment_ordered)
    };

    if depth == 0 && marker.is_none() {
        return None;
    }
    let mut prefix = " ".repeat(depth);
    if let Some(m) = marker {
        prefix.push_str(&m);
    }
    Some(prefix)
}

/// When `line_tail` is exactly a known list marker, the number of chars to
/// delete; otherwise `None`.
pub fn list_marker_len(line_tail: &str) -> Option<usize> {
    DELETABLE
        .iter()
        .find(|m| line_tail == **m)
        .map(|m| m.chars().count())
}

/// Widths (before, after) of the paired inline marker around the cursor,
/// when one is present: an empty bold pair collapses as 2+2, a single
/// italic or code pair as 1+1.
pub fn paired_marker_widths(before: &str, after: &str) -> Option<(usize, usize)> {
    if before.ends_with(BOLD) && after.starts_with(BOLD) {
        return Some((2, 2));
    }
    let last = before.chars().last()?;
    let first = after.chars().next()?;
    if is_inline_marker(last) && is_inline_marker(first) {
        return Some((1, 1));
    }
    None
}

fn is_inline_marker(c: char) -> bool {
    c == '*' || c == '`'
}

/// The ordered-list marker at the start of `rest`, when present: a single
/// leading digit followed by ". ".
fn ordered_marker(rest: &str) -> Option<&str> {
    let first = rest.chars().next()?;
    if first.is_ascii_digit() && rest[1..].starts_with(". ") {
        Some(&rest[..3])
    } else {
        None
    }
}

//! Parenthesis-aware splitting of WKT bodies.
//!
//! The scanner walks the text once, tracking nesting depth, so sibling
//! components are found in linear time regardless of how deeply they nest.

/// Fragments of a body split on commas at nesting depth zero
#[derive(Debug, PartialEq)]
pub(crate) struct TopLevelSplit<'a> {
    pub fragments: Vec<&'a str>,
    /// False if a closing parenthesis had no partner or a group was left open
    pub balanced: bool,
}

/// How a fragment was wrapped before `strip_one_layer` removed the parentheses
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Wrapping {
    Both,
    Neither,
    Partial,
}

/// Split `body` on the commas that are not enclosed in parentheses.
///
/// An empty (or blank) body has no fragments. Fragments are returned untrimmed.
pub(crate) fn split_top_level(body: &str) -> TopLevelSplit<'_> {
    scan(body, false)
}

/// Split a list of parenthesized components, such as the rings of a polygon.
///
/// Only a depth-zero comma between a closing and an opening parenthesis
/// (`) , (`) separates components, so a list missing its inner parentheses
/// stays in one fragment.
pub(crate) fn split_components(body: &str) -> TopLevelSplit<'_> {
    scan(body, true)
}

// True if the comma at `i` sits between `)` and `(`, ignoring whitespace
fn is_paren_boundary(body: &str, i: usize) -> bool {
    body[..i].trim_end().ends_with(')') && body[i + 1..].trim_start().starts_with('(')
}

fn scan(body: &str, paren_boundaries_only: bool) -> TopLevelSplit<'_> {
    if body.trim().is_empty() {
        return TopLevelSplit {
            fragments: Vec::new(),
            balanced: true,
        };
    }

    let mut fragments = Vec::new();
    let mut balanced = true;
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, ch) in body.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => balanced = false,
            },
            ',' if depth == 0 && (!paren_boundaries_only || is_paren_boundary(body, i)) => {
                fragments.push(&body[start..i]);
                start = i + 1;
            }
            _ => (),
        }
    }
    fragments.push(&body[start..]);

    TopLevelSplit {
        fragments,
        balanced: balanced && depth == 0,
    }
}

/// Trim a fragment and remove at most one opening and one closing parenthesis.
pub(crate) fn strip_one_layer(fragment: &str) -> (&str, Wrapping) {
    let trimmed = fragment.trim();
    let (inner, opened) = match trimmed.strip_prefix('(') {
        Some(s) => (s, true),
        None => (trimmed, false),
    };
    let (inner, closed) = match inner.strip_suffix(')') {
        Some(s) => (s, true),
        None => (inner, false),
    };

    let wrapping = match (opened, closed) {
        (true, true) => Wrapping::Both,
        (false, false) => Wrapping::Neither,
        _ => Wrapping::Partial,
    };
    (inner, wrapping)
}

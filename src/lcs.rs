use std::cmp::Reverse;
use std::ops::Range;

use crate::window::Limit;

/// Separators the path shortener treats as segment boundaries.
pub const PATH_SEPARATORS: &[char] = &['/', '\\'];

/// Longest run of characters found verbatim in every string of the window.
///
/// With an empty `separators` set any run qualifies. Ties go to the run starting
/// earliest in the first string, and the window is reduced pairwise: the run shared
/// by the first two strings is then matched against the third, and so on.
///
/// With separators, only runs that begin and end with a separator character qualify
/// (e.g. `"/module/"`), so a match never cuts a segment in half. A window of one
/// string is returned whole in both modes.
///
/// `None` when the window is empty; `Some("")` when nothing qualifies.
pub fn common_substring<'a, S: AsRef<str>>(
    strings: &'a [S],
    limit: Limit,
    separators: &[char],
) -> Option<&'a str> {
    let (first, rest) = limit.window(strings).split_first()?;
    let first = first.as_ref();
    if rest.is_empty() {
        return Some(first);
    }

    if separators.is_empty() {
        let mut shared = first;
        for other in rest {
            shared = longest_shared_run(shared, other.as_ref());
            if shared.is_empty() {
                break;
            }
        }
        return Some(shared);
    }

    let found = aligned_spans(first, separators)
        .into_iter()
        .map(|span| &first[span])
        .find(|candidate| rest.iter().all(|s| s.as_ref().contains(*candidate)));
    Some(found.unwrap_or(&first[..0]))
}

/// Byte ranges of `s` that start and end on a separator, longest first.
/// Equal lengths keep their left-to-right order.
pub(crate) fn aligned_spans(s: &str, separators: &[char]) -> Vec<Range<usize>> {
    let bounds = s
        .char_indices()
        .filter(|(_, c)| separators.contains(c))
        .map(|(i, c)| (i, i + c.len_utf8()))
        .collect::<Vec<_>>();

    let mut spans = Vec::new();
    for (n, &(start, _)) in bounds.iter().enumerate() {
        for &(_, end) in &bounds[n + 1..] {
            spans.push(start..end);
        }
    }
    spans.sort_by_cached_key(|span| (Reverse(s[span.clone()].chars().count()), span.start));
    spans
}

/// Classic two-string dynamic program; the result is a slice of `a`.
fn longest_shared_run<'a>(a: &'a str, b: &str) -> &'a str {
    let a_chars = a.char_indices().collect::<Vec<_>>();
    let b_chars = b.chars().collect::<Vec<_>>();

    // prev[j + 1]: length of the shared run ending at the previous char of `a` and b[j]
    let mut prev = vec![0usize; b_chars.len() + 1];
    let mut cur = vec![0usize; b_chars.len() + 1];
    let mut best_len = 0;
    let mut best_end = 0;

    for (i, &(_, ca)) in a_chars.iter().enumerate() {
        for (j, &cb) in b_chars.iter().enumerate() {
            cur[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            if cur[j + 1] > best_len {
                best_len = cur[j + 1];
                best_end = i + 1;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    if best_len == 0 {
        return &a[..0];
    }
    let start = a_chars[best_end - best_len].0;
    let end = a_chars.get(best_end).map_or(a.len(), |&(i, _)| i);
    &a[start..end]
}

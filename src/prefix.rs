use crate::window::Limit;

/// Longest prefix shared by every string in the window.
///
/// `None` when the window is empty; `Some("")` when the strings share nothing.
/// The result borrows from the first string of the window.
pub fn common_prefix<S: AsRef<str>>(strings: &[S], limit: Limit) -> Option<&str> {
    let (first, rest) = limit.window(strings).split_first()?;
    let first = first.as_ref();

    let mut end = first.len();
    for other in rest {
        let other = other.as_ref();
        let matched = first
            .char_indices()
            .zip(other.chars())
            .find(|((_, a), b)| a != b)
            .map(|((i, _), _)| i)
            .unwrap_or_else(|| first.len().min(other.len()));
        end = end.min(matched);
        if end == 0 {
            break;
        }
    }
    Some(&first[..end])
}

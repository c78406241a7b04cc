pub(super) fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    let mut cursor = 0usize;

    while let Some((_, next_cursor)) = next_word_at(text, cursor) {
        count += 1;
        cursor = next_cursor;
    }

    count
}

/// Returns the word starting at or after `cursor` and the byte offset just past it.
///
/// `cursor` must sit on a char boundary.
pub(super) fn next_word_at(text: &str, cursor: usize) -> Option<(&str, usize)> {
    let rest = text.get(cursor..)?;
    let (skip, _) = rest.char_indices().find(|(_, ch)| !ch.is_whitespace())?;

    let start = cursor + skip;
    let end = text[start..]
        .char_indices()
        .find(|(_, ch)| ch.is_whitespace())
        .map_or(text.len(), |(offset, _)| start + offset);

    Some((&text[start..end], end))
}

pub(super) fn first_words_excerpt(text: &str, max_words: usize) -> &str {
    let text = text.trim_start();
    if text.is_empty() || max_words == 0 {
        return "";
    }

    let mut words = 0usize;
    let mut end = 0usize;
    let mut in_word = false;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if in_word {
                words += 1;
                if words >= max_words {
                    return &text[..idx];
                }
            }
            in_word = false;
        } else {
            in_word = true;
            end = idx + ch.len_utf8();
        }
    }

    &text[..end]
}

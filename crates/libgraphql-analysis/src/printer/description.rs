/// Renders `description` as `#` comment lines at `indentation`, wrapping
/// long lines to fit within 120 columns.
///
/// Every item after the first in an indented block is separated from its
/// predecessor by a blank line.
pub(super) fn print_description(
    description: Option<&str>,
    indentation: &str,
    first_in_block: bool,
) -> String {
    let Some(description) = description else {
        return String::new();
    };

    let mut output =
        if !indentation.is_empty() && !first_in_block {
            "\n".to_string()
        } else {
            String::new()
        };

    let max_len = 120_usize.saturating_sub(indentation.chars().count());
    for line in description.split('\n') {
        if line.is_empty() {
            output.push_str(&format!("{indentation}#\n"));
        } else {
            for subline in break_line(line, max_len) {
                output.push_str(&format!("{indentation}# {subline}\n"));
            }
        }
    }
    output
}

/// Splits `line` into chunks of at most `max_len - 40` characters (and at
/// least 15), breaking only where a space follows the chunk. Lines that are
/// already short enough are returned as-is.
pub(super) fn break_line(line: &str, max_len: usize) -> Vec<String> {
    const MIN_CHUNK_LEN: usize = 15;

    let chars: Vec<char> = line.chars().collect();
    if chars.len() < max_len + 5 {
        return vec![line.to_string()];
    }
    let max_chunk_len = match max_len.checked_sub(40) {
        Some(len) if len >= MIN_CHUNK_LEN => len,
        _ => return vec![line.to_string()],
    };

    // Alternating runs of unmatched text and matched chunks, starting with
    // the (possibly empty) text before the first chunk.
    let mut parts: Vec<String> = vec![];
    let mut pos = 0;
    while let Some((chunk_start, chunk_end)) =
        find_chunk(&chars, pos, MIN_CHUNK_LEN, max_chunk_len) {
        parts.push(chars[pos..chunk_start].iter().collect());
        parts.push(chars[chunk_start..chunk_end].iter().collect());
        pos = chunk_end;
    }
    parts.push(chars[pos..].iter().collect());
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }

    if parts.len() < 4 {
        return vec![line.to_string()];
    }

    let mut sublines = vec![parts[..3].concat()];
    let rest = &parts[3..];
    for i in (0..rest.len()).step_by(2) {
        let chunk: String = rest[i].chars().skip(1).collect();
        let trailer = rest.get(i + 1).map(|s| s.as_str()).unwrap_or("");
        sublines.push(chunk + trailer);
    }
    sublines
}

/// Finds the first chunk at or after `from`: an optional leading space (or
/// the start of the line), then as many characters as possible within
/// `min_len..=max_len` such that the chunk is followed by a space or the end
/// of the line.
fn find_chunk(
    chars: &[char],
    from: usize,
    min_len: usize,
    max_len: usize,
) -> Option<(usize, usize)> {
    let body_end = |body_start: usize| -> Option<usize> {
        let available = chars.len().checked_sub(body_start)?;
        let longest = max_len.min(available);
        (min_len..=longest).rev()
            .map(|len| body_start + len)
            .find(|&end| end == chars.len() || chars[end] == ' ')
    };

    for start in from..chars.len() {
        if chars[start] == ' '
            && let Some(end) = body_end(start + 1) {
            return Some((start, end));
        }
        if start == 0
            && let Some(end) = body_end(0) {
            return Some((0, end));
        }
    }
    None
}

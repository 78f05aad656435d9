//! Shared text editing utilities for the picker's text field
//!
//! Editing keys do not mutate the text directly. They describe the byte range
//! they would replace so the picker can run the edit through its filter first.

// =============================================================================
// Char Boundaries
// =============================================================================

/// Byte index of the char boundary before `index`
pub fn prev_char_boundary(text: &str, index: usize) -> usize {
    text[..index.min(text.len())]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte index of the char boundary after `index`
pub fn next_char_boundary(text: &str, index: usize) -> usize {
    let index = index.min(text.len());
    text[index..]
        .chars()
        .next()
        .map(|c| index + c.len_utf8())
        .unwrap_or(text.len())
}

// =============================================================================
// Selection Helpers
// =============================================================================

/// Normalize a selection range so start <= end
#[inline]
pub fn normalize_selection(selection: (usize, usize)) -> (usize, usize) {
    let (start, end) = selection;
    (start.min(end), start.max(end))
}

/// Get the selection anchor for extending selection with shift+arrow keys
/// Returns the existing anchor if selection exists, otherwise the cursor position
pub fn get_selection_anchor(selection: Option<(usize, usize)>, cursor: usize) -> usize {
    selection.map(|(s, _)| s).unwrap_or(cursor)
}

// =============================================================================
// Edit Ranges
// =============================================================================

/// Range replaced by typed text: the selection, or an empty range at the cursor
pub fn insertion_range(cursor: usize, selection: Option<(usize, usize)>) -> (usize, usize) {
    match selection {
        Some(sel) => normalize_selection(sel),
        None => (cursor, cursor),
    }
}

/// Range removed by backspace, `None` if there is nothing to remove
pub fn backspace_range(
    text: &str,
    cursor: usize,
    selection: Option<(usize, usize)>,
) -> Option<(usize, usize)> {
    match selection.map(normalize_selection) {
        Some((start, end)) if start != end => Some((start, end)),
        _ if cursor > 0 => Some((prev_char_boundary(text, cursor), cursor)),
        _ => None,
    }
}

/// Range removed by delete, `None` if there is nothing to remove
pub fn delete_range(
    text: &str,
    cursor: usize,
    selection: Option<(usize, usize)>,
) -> Option<(usize, usize)> {
    match selection.map(normalize_selection) {
        Some((start, end)) if start != end => Some((start, end)),
        _ if cursor < text.len() => Some((cursor, next_char_boundary(text, cursor))),
        _ => None,
    }
}

// =============================================================================
// Cursor Movement
// =============================================================================

/// Result of a cursor movement: new cursor and selection
pub type CursorMove = (usize, Option<(usize, usize)>);

/// Move left, extending the selection when `shift` is held
pub fn move_left(
    text: &str,
    cursor: usize,
    selection: Option<(usize, usize)>,
    shift: bool,
) -> CursorMove {
    if shift {
        let anchor = get_selection_anchor(selection, cursor);
        let cursor = prev_char_boundary(text, cursor);
        (cursor, Some((anchor, cursor)))
    } else if let Some(sel) = selection {
        (normalize_selection(sel).0, None)
    } else {
        (prev_char_boundary(text, cursor), None)
    }
}

/// Move right, extending the selection when `shift` is held
pub fn move_right(
    text: &str,
    cursor: usize,
    selection: Option<(usize, usize)>,
    shift: bool,
) -> CursorMove {
    if shift {
        let anchor = get_selection_anchor(selection, cursor);
        let cursor = next_char_boundary(text, cursor);
        (cursor, Some((anchor, cursor)))
    } else if let Some(sel) = selection {
        (normalize_selection(sel).1, None)
    } else {
        (next_char_boundary(text, cursor), None)
    }
}

/// Move to `target` (start or end of text), extending the selection when `shift` is held
pub fn move_to(
    cursor: usize,
    selection: Option<(usize, usize)>,
    target: usize,
    shift: bool,
) -> CursorMove {
    if shift {
        let anchor = get_selection_anchor(selection, cursor);
        (target, Some((anchor, target)))
    } else {
        (target, None)
    }
}

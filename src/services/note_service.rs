use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{NoteAction, NoteEdit},
        dto::request::NoteActionRequestDto,
    },
};

pub const EMPTY_SELECTION_MESSAGE: &str =
    "Please select some text first before applying AI enhancements.";

static CAMEL_JOIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel join pattern is valid"));
static REPEATED_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\s+").expect("whitespace pattern is valid"));

/// Byte offset of the `index`-th char, allowing one-past-the-end.
fn byte_offset(content: &str, index: usize) -> Option<usize> {
    content
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(content.len()))
        .nth(index)
}

fn char_range(content: &str, start: usize, end: usize) -> AppResult<(usize, usize)> {
    if start > end {
        return Err(AppError::ValidationError(format!(
            "Selection start {} is after selection end {}",
            start, end
        )));
    }

    match (byte_offset(content, start), byte_offset(content, end)) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(AppError::ValidationError(format!(
            "Selection {}..{} is outside the note content",
            start, end
        ))),
    }
}

/// Replaces chars `start..end` of `content` with `replacement`.
pub fn replace_range(content: &str, start: usize, end: usize, replacement: &str) -> AppResult<String> {
    let (from, to) = char_range(content, start, end)?;

    let mut updated = String::with_capacity(content.len() - (to - from) + replacement.len());
    updated.push_str(&content[..from]);
    updated.push_str(replacement);
    updated.push_str(&content[to..]);
    Ok(updated)
}

/// Local rewrite of a selected fragment. Returns an HTML fragment.
pub fn transform_selection(action: NoteAction, text: &str) -> String {
    match action {
        NoteAction::Summarize => {
            // a third of the UTF-16 length, without splitting a surrogate pair
            let keep = text.encode_utf16().count() / 3;
            let mut units = 0;
            let head: String = text
                .chars()
                .take_while(|c| {
                    units += c.len_utf16();
                    units <= keep
                })
                .collect();
            format!("<p><strong>Summary:</strong> {}...</p>", head)
        }
        NoteAction::Expand => format!(
            "<p>{}</p><p>Furthermore, this concept can be expanded to include additional aspects such as cultural context, practical applications, and historical significance. Considering these dimensions provides a more comprehensive understanding of the topic.</p>",
            text
        ),
        NoteAction::Simplify => text
            .split('.')
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(|sentence| format!("<p>{}.</p>", sentence))
            .collect(),
        NoteAction::Correct => {
            let spaced = CAMEL_JOIN.replace_all(text, "$1 $2");
            format!("<p>{}</p>", REPEATED_WHITESPACE.replace_all(&spaced, " "))
        }
        NoteAction::Academic => format!(
            "<p>It can be substantiated that {} This perspective is corroborated by numerous scholarly sources.</p>",
            text.to_lowercase().replace("i ", "one ")
        ),
        NoteAction::Creative => format!(
            "<p>Imagine this: {} This vivid scenario invites us to consider the possibilities and implications of such a concept.</p>",
            text
        ),
    }
}

pub fn apply_action(request: &NoteActionRequestDto) -> AppResult<NoteEdit> {
    let (from, to) = char_range(&request.content, request.selection_start, request.selection_end)?;
    let selected = &request.content[from..to];
    if selected.is_empty() {
        return Err(AppError::ValidationError(EMPTY_SELECTION_MESSAGE.to_string()));
    }

    let fragment = transform_selection(request.action, selected);
    let content = replace_range(
        &request.content,
        request.selection_start,
        request.selection_end,
        &fragment,
    )?;
    log::debug!(
        "Applied {:?} to {} selected chars",
        request.action,
        request.selection_end - request.selection_start
    );

    Ok(NoteEdit { content, fragment })
}

//! # Editable Text
//!
//! A rendering-agnostic inline editor. [`EditableText`] shows a committed
//! value, can enter an edit mode with its own draft buffer and cursor, and
//! emits the new value when the edit is committed (blur or confirm).
//!
//! ## Commit Rules
//!
//! - The draft is trimmed.
//! - A trimmed draft equal to the previous value emits nothing.
//! - An empty trimmed draft keeps the previous value and emits nothing.
//! - Anything else replaces the value and is emitted once.

/// Decide what a finished edit commits. Returns `None` when the stored value
/// must stay as it was.
pub fn resolve_commit(previous: &str, edited: &str) -> Option<String> {
    let trimmed = edited.trim();
    if trimmed.is_empty() || trimmed == previous {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Draft {
    text: String,
    /// Cursor position counted in chars, `0..=text.chars().count()`.
    cursor: usize,
}

impl Draft {
    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}

/// A single editable string with an optional in-progress edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableText {
    value: String,
    draft: Option<Draft>,
}

impl EditableText {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            draft: None,
        }
    }

    /// The committed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// What should be on screen: the draft while editing, else the value.
    pub fn display_text(&self) -> &str {
        self.draft.as_ref().map_or(&self.value, |d| &d.text)
    }

    /// Cursor position in chars, only while editing.
    pub fn cursor(&self) -> Option<usize> {
        self.draft.as_ref().map(|d| d.cursor)
    }

    /// Enter edit mode with the cursor at the end. No-op if already editing.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(Draft {
                cursor: self.value.chars().count(),
                text: self.value.clone(),
            });
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(draft) = self.draft.as_mut() {
            let at = draft.byte_offset(draft.cursor);
            draft.text.insert(at, c);
            draft.cursor += 1;
        }
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            if draft.cursor > 0 {
                draft.cursor -= 1;
                let at = draft.byte_offset(draft.cursor);
                draft.text.remove(at);
            }
        }
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            if draft.cursor < draft.len_chars() {
                let at = draft.byte_offset(draft.cursor);
                draft.text.remove(at);
            }
        }
    }

    pub fn move_left(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.cursor = draft.cursor.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.cursor = (draft.cursor + 1).min(draft.len_chars());
        }
    }

    pub fn move_home(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.cursor = 0;
        }
    }

    pub fn move_end(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.cursor = draft.len_chars();
        }
    }

    /// Leave edit mode, keeping the draft according to the commit rules.
    ///
    /// Returns the new value when it actually changed.
    pub fn commit(&mut self) -> Option<String> {
        let draft = self.draft.take()?;
        let committed = resolve_commit(&self.value, &draft.text)?;
        self.value.clone_from(&committed);
        Some(committed)
    }

    /// Leave edit mode and throw the draft away.
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}

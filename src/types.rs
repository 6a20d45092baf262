use crate::marker::{self, ListMarkerKind};

/// A single user intent produced by one key press.
///
/// Actions are constructed fresh per key event and carry no identity beyond
/// their tag and payload. The engine dispatches on them exhaustively, so
/// adding a variant makes the compiler flag every unhandled match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Commit text verbatim at the cursor: letters, punctuation, space.
    CommitLiteral(String),
    /// Context-sensitive backspace: collapses paired markers, removes list
    /// markers as a unit, otherwise falls back to a raw backspace.
    Delete,
    /// Line break with indentation and list-marker continuation.
    Enter,
    /// Indent the current line by one 4-space step.
    IndentForward,
    /// Remove one 4-space step from the current line's indentation.
    IndentBack,
    /// Toggle a "**" pair around the cursor or selection.
    ToggleBold,
    /// Toggle a "*" pair around the cursor or selection.
    ToggleItalic,
    /// Toggle a "`" pair around the cursor or selection.
    ToggleCode,
    /// Insert the literal marker text for `kind` at the cursor.
    InsertListMarker(ListMarkerKind),
    /// Reserved: markdown link insertion. Not yet implemented.
    InsertLink,
    /// Reserved: markdown image insertion. Not yet implemented.
    InsertImage,
    /// Reserved: markdown table insertion. Not yet implemented.
    InsertTable,
    /// Dismiss the keyboard.
    Done,
    /// No effect; for keys whose behavior is owned by the host layer.
    NoOp,
}

impl Action {
    /// Whether planning this action inspects the text around the cursor.
    pub fn needs_context(&self) -> bool {
        matches!(
            self,
            Action::Delete
                | Action::Enter
                | Action::IndentForward
                | Action::IndentBack
                | Action::ToggleBold
                | Action::ToggleItalic
                | Action::ToggleCode
        )
    }
}

/// Where the cursor lands relative to text committed through
/// [`commit_text`](crate::traits::TextSurface::commit_text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPos {
    /// Immediately after the inserted text.
    After,
    /// At the start of the inserted text, i.e. before it.
    Before,
}

/// Raw key events forwarded to the host for default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKey {
    /// Host-default single-character delete. The host owns grapheme and
    /// surrogate-pair handling here.
    Backspace,
    /// Host-default line break.
    Enter,
}

/// A read-only snapshot of the text around the cursor.
///
/// Captured fresh from the surface for every action and never persisted.
/// Absent fields mean the surface had no window to offer; the engine treats
/// that as a benign no-op condition, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorContext {
    /// Up to the context window of chars immediately before the cursor.
    pub before: Option<String>,
    /// Up to the context window of chars immediately after the cursor.
    pub after: Option<String>,
    /// The selected text; absent when there is no (or an empty) selection.
    pub selection: Option<String>,
}

impl CursorContext {
    /// A context with nothing in it, for actions that never look at one.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The current line: the substring of `before` from the last line break
    /// up to the cursor. `None` when no before-text is available.
    pub fn current_line(&self) -> Option<&str> {
        self.before.as_deref().map(marker::last_line)
    }
}

/// One primitive host mutation.
///
/// These are the concrete operations the host applies to its text storage;
/// plans with more than one of them are applied as a single batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Remove `before` chars preceding and `after` chars following the
    /// cursor.
    DeleteSurrounding { before: usize, after: usize },
    /// Insert `text`, replacing any selection, cursor placed per `cursor`.
    Commit { text: String, cursor: CursorPos },
    /// Clear the composing region ahead of edits that replace a selection.
    FinishComposing,
    /// Forward a raw key for host-default handling.
    SendKey(RawKey),
    /// Ask the host to dismiss the keyboard.
    Hide,
}

/// The engine's output for one action: an ordered list of primitive
/// operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPlan {
    pub ops: Vec<EditOp>,
}

impl EditPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_op(op: EditOp) -> Self {
        Self { ops: vec![op] }
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn push(&mut self, op: EditOp) {
        self.ops.push(op);
    }

    pub fn delete(&mut self, before: usize, after: usize) {
        self.ops.push(EditOp::DeleteSurrounding { before, after });
    }

    pub fn commit(&mut self, text: impl Into<String>, cursor: CursorPos) {
        self.ops.push(EditOp::Commit {
            text: text.into(),
            cursor,
        });
    }
}

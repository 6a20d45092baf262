//! Platform-agnostic key descriptors and the static key-to-action table.
//!
//! Hosts map their key widgets onto [`KeyCode`]s. Shift/caps state is
//! resolved here into literal text, so the engine itself stays
//! capitalization-agnostic; the toggle state lives in the host layer.

use crate::marker::ListMarkerKind;
use crate::types::Action;

/// Key codes for every key the markdown layouts carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key. Hosts should store the lowercase form; SHIFT
    /// resolves the uppercase one.
    Char(char),
    Space,
    Delete,
    Enter,
    Bold,
    Italic,
    Code,
    BulletList,
    NumberedList,
    TaskList,
    IndentForward,
    IndentBack,
    /// Link key from later layout revisions; its action is reserved.
    Link,
    /// Image key from later layout revisions; its action is reserved.
    Image,
    /// Table key from later layout revisions; its action is reserved.
    Table,
    /// Shift/caps toggle. The toggle itself is host state.
    Shift,
    Done,
}

bitflags::bitflags! {
    /// Modifier flags resolved by the host layer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// Shift or caps lock is active.
        const SHIFT = 0b0001;
    }
}

/// A single resolved key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: Modifiers::empty(),
        }
    }

    pub fn shifted(code: KeyCode) -> Self {
        Self {
            code,
            mods: Modifiers::SHIFT,
        }
    }
}

/// The static key-to-action table.
pub fn action_for(event: KeyEvent) -> Action {
    match event.code {
        KeyCode::Char(c) => {
            let text = if event.mods.contains(Modifiers::SHIFT) {
                c.to_uppercase().to_string()
            } else {
                c.to_string()
            };
            Action::CommitLiteral(text)
        }
        KeyCode::Space => Action::CommitLiteral(" ".to_owned()),
        KeyCode::Delete => Action::Delete,
        KeyCode::Enter => Action::Enter,
        KeyCode::Bold => Action::ToggleBold,
        KeyCode::Italic => Action::ToggleItalic,
        KeyCode::Code => Action::ToggleCode,
        KeyCode::BulletList => Action::InsertListMarker(ListMarkerKind::Unordered),
        KeyCode::NumberedList => Action::InsertListMarker(ListMarkerKind::Ordered),
        KeyCode::TaskList => Action::InsertListMarker(ListMarkerKind::Checkbox),
        KeyCode::IndentForward => Action::IndentForward,
        KeyCode::IndentBack => Action::IndentBack,
        KeyCode::Link => Action::InsertLink,
        KeyCode::Image => Action::InsertImage,
        KeyCode::Table => Action::InsertTable,
        KeyCode::Shift => Action::NoOp,
        KeyCode::Done => Action::Done,
    }
}

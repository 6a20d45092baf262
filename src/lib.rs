pub mod engine;
pub mod key;
pub mod marker;
pub mod repeat;
pub mod traits;
pub mod types;

pub use crate::engine::{CONTEXT_WINDOW, apply_plan, perform_action, plan_edits};
pub use crate::key::{KeyCode, KeyEvent, Modifiers, action_for};
pub use crate::marker::ListMarkerKind;
pub use crate::repeat::{KeyRepeater, RepeatConfig};
pub use crate::traits::{BatchEdit, TextSurface};
pub use crate::types::{Action, CursorContext, CursorPos, EditOp, EditPlan, RawKey};

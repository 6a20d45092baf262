use tracing::trace;

use crate::marker;
use crate::traits::{BatchEdit, TextSurface};
use crate::types::{Action, CursorContext, CursorPos, EditOp, EditPlan, RawKey};

/// Chars of context fetched on each side of the cursor.
pub const CONTEXT_WINDOW: usize = 100;

/// Chars inspected before the cursor for list-marker removal; the longest
/// marker sets the width.
const MARKER_SCAN: usize = marker::CHECKBOX.len();

/// Perform one action against the surface.
///
/// Context-dependent actions run read + plan + apply inside a batch so the
/// host sees a single coherent mutation; the guard releases the batch on
/// every path. Literal commits and control actions apply directly.
pub fn perform_action<S: TextSurface>(action: &Action, surface: &mut S) {
    if action.needs_context() {
        let mut batch = BatchEdit::begin(surface);
        let ctx = batch.surface().context(CONTEXT_WINDOW);
        let plan = plan_edits(action, &ctx);
        apply_plan(&plan, batch.surface());
    } else {
        let plan = plan_edits(action, &CursorContext::empty());
        apply_plan(&plan, surface);
    }
}

/// Decide the edits for `action` given a context snapshot.
///
/// Pure: applying the returned plan is the caller's business.
pub fn plan_edits(action: &Action, ctx: &CursorContext) -> EditPlan {
    match action {
        Action::CommitLiteral(text) => commit_plan(text),
        Action::InsertListMarker(kind) => commit_plan(kind.literal()),
        Action::Delete => plan_delete(ctx),
        Action::Enter => plan_enter(ctx),
        Action::IndentForward => plan_indent(ctx, true),
        Action::IndentBack => plan_indent(ctx, false),
        Action::ToggleBold => plan_toggle(ctx, marker::BOLD),
        Action::ToggleItalic => plan_toggle(ctx, marker::ITALIC),
        Action::ToggleCode => plan_toggle(ctx, marker::CODE),
        Action::InsertLink | Action::InsertImage | Action::InsertTable => {
            todo!("markdown link/image/table insertion")
        }
        Action::Done => EditPlan::from_op(EditOp::Hide),
        Action::NoOp => EditPlan::new(),
    }
}

/// Apply each op in order. Callers wanting atomicity wrap this in a
/// [`BatchEdit`]; [`perform_action`] does.
pub fn apply_plan<S: TextSurface>(plan: &EditPlan, surface: &mut S) {
    for op in &plan.ops {
        match op {
            EditOp::DeleteSurrounding { before, after } => {
                surface.delete_surrounding(*before, *after);
            }
            EditOp::Commit { text, cursor } => surface.commit_text(text, *cursor),
            EditOp::FinishComposing => surface.finish_composing(),
            EditOp::SendKey(key) => surface.send_key(*key),
            EditOp::Hide => surface.hide(),
        }
    }
}

fn commit_plan(text: &str) -> EditPlan {
    let mut plan = EditPlan::new();
    plan.commit(text, CursorPos::After);
    plan
}

// Priority order: paired-marker collapse, list-marker removal, raw fallback.
// First match wins.
fn plan_delete(ctx: &CursorContext) -> EditPlan {
    let mut plan = EditPlan::new();

    if let (Some(before), Some(after)) = (ctx.before.as_deref(), ctx.after.as_deref())
        && let Some((b, a)) = marker::paired_marker_widths(before, after)
    {
        trace!(before = b, after = a, "collapsing paired marker");
        plan.delete(b, a);
        return plan;
    }

    if let Some(before) = ctx.before.as_deref() {
        // Only the chars a marker could span, restricted to the current line.
        let tail = marker::last_line(marker::tail_chars(before, MARKER_SCAN));
        if let Some(n) = marker::list_marker_len(tail) {
            trace!(chars = n, "removing list marker");
            plan.delete(n, 0);
            return plan;
        }
    }

    trace!("delete fallback, raw backspace");
    plan.push(EditOp::SendKey(RawKey::Backspace));
    plan
}

fn plan_enter(ctx: &CursorContext) -> EditPlan {
    let mut plan = EditPlan::new();
    plan.commit("\n", CursorPos::After);
    if let Some(line) = ctx.current_line()
        && let Some(prefix) = marker::continuation_prefix(line)
    {
        trace!(prefix = %prefix, "continuing list on new line");
        plan.commit(prefix, CursorPos::After);
    }
    plan
}

// The current line here is the text from line start to cursor; anything
// after the cursor on the same line stays untouched.
fn plan_indent(ctx: &CursorContext, forward: bool) -> EditPlan {
    let mut plan = EditPlan::new();
    let Some(line) = ctx.current_line() else {
        return plan;
    };
    if line.is_empty() {
        return plan;
    }

    let reindented = if forward {
        let mut s = String::with_capacity(marker::INDENT_UNIT.len() + line.len());
        s.push_str(marker::INDENT_UNIT);
        s.push_str(line);
        s
    } else {
        match line.strip_prefix(marker::INDENT_UNIT) {
            Some(rest) => rest.to_owned(),
            // Fewer than 4 leading spaces: nothing to unindent.
            None => return plan,
        }
    };

    plan.delete(line.chars().count(), 0);
    plan.commit(reindented, CursorPos::After);
    plan
}

fn plan_toggle(ctx: &CursorContext, marker_text: &str) -> EditPlan {
    let mut plan = EditPlan::new();
    match ctx.selection.as_deref() {
        None => {
            // Pair with the cursor between the halves: `**|**`.
            plan.commit(marker_text, CursorPos::After);
            plan.commit(marker_text, CursorPos::Before);
        }
        Some(selection) => {
            // The first commit replaces the selection; cursor ends after the
            // closing marker.
            plan.push(EditOp::FinishComposing);
            plan.commit(marker_text, CursorPos::After);
            plan.commit(selection, CursorPos::After);
            plan.commit(marker_text, CursorPos::After);
        }
    }
    plan
}

use crate::types::{CursorContext, CursorPos, RawKey};

/// The host-implemented text-editing capability the engine drives.
///
/// Mirrors an IME input connection: bounded reads around the cursor, batched
/// mutations, and raw-key forwarding for behavior the host owns. All counts
/// are in chars. The engine never obtains a surface implicitly; hosts inject
/// one per action, which also makes the engine testable against a fake.
pub trait TextSurface {
    // Bounded reads; may return fewer chars than asked, or None when the
    // surface has no window to offer.
    fn text_before(&self, max_chars: usize) -> Option<String>;
    fn text_after(&self, max_chars: usize) -> Option<String>;
    fn selected_text(&self) -> Option<String>;

    // Scoped grouping of subsequent mutations into one host-visible edit.
    fn begin_batch(&mut self);
    fn end_batch(&mut self);

    /// Remove `before` chars preceding and `after` chars following the
    /// cursor.
    fn delete_surrounding(&mut self, before: usize, after: usize);
    /// Insert `text`, replacing any selection; cursor placed per `cursor`.
    fn commit_text(&mut self, text: &str, cursor: CursorPos);
    /// Clear the composing region, if the host has one.
    fn finish_composing(&mut self);
    /// Forward a raw key event for host-default handling.
    fn send_key(&mut self, key: RawKey);
    /// Dismiss the input method.
    fn hide(&mut self);

    /// Snapshot the text around the cursor, `window` chars each side.
    /// Empty selections normalize to `None`.
    fn context(&self, window: usize) -> CursorContext {
        CursorContext {
            before: self.text_before(window),
            after: self.text_after(window),
            selection: self.selected_text().filter(|s| !s.is_empty()),
        }
    }
}

/// Scoped batch edit.
///
/// `end_batch` runs on drop, so every exit path -- including the no-op ones
/// -- releases the batch and the host never observes a half-applied edit or
/// a leaked open batch.
pub struct BatchEdit<'a, S: TextSurface> {
    surface: &'a mut S,
}

impl<'a, S: TextSurface> BatchEdit<'a, S> {
    pub fn begin(surface: &'a mut S) -> Self {
        surface.begin_batch();
        Self { surface }
    }

    pub fn surface(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: TextSurface> Drop for BatchEdit<'_, S> {
    fn drop(&mut self) {
        self.surface.end_batch();
    }
}

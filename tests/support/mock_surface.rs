use md_keys::traits::TextSurface;
use md_keys::types::{CursorPos, RawKey};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

/// In-memory text surface: a rope-backed buffer, a char cursor, an optional
/// selection, and counters for every host-side effect the engine can invoke.
pub struct MockSurface {
    rope: Rope,
    cursor: usize,
    selection: Option<(usize, usize)>,
    pub batch_depth: i32,
    pub batches_begun: u32,
    pub batches_ended: u32,
    pub composing_finished: u32,
    pub raw_keys: Vec<RawKey>,
    pub hidden: bool,
    /// When false the surface offers no context windows, simulating a host
    /// with nothing to read.
    pub available: bool,
}

impl MockSurface {
    pub fn new(text: &str, cursor: usize) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor,
            selection: None,
            batch_depth: 0,
            batches_begun: 0,
            batches_ended: 0,
            composing_finished: 0,
            raw_keys: Vec::new(),
            hidden: false,
            available: true,
        }
    }

    /// Parse a buffer with `|` marking the cursor: "ab|cd".
    pub fn from_marked(marked: &str) -> Self {
        let cursor = marked
            .chars()
            .position(|c| c == '|')
            .expect("marked buffer needs a | cursor");
        let text: String = marked.chars().filter(|&c| c != '|').collect();
        Self::new(&text, cursor)
    }

    /// Buffer with `[start, end)` selected (char indices), cursor at `end`.
    pub fn with_selection(text: &str, start: usize, end: usize) -> Self {
        let mut surface = Self::new(text, end);
        surface.selection = Some((start, end));
        surface
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The buffer with `|` re-inserted at the cursor, for assertions in the
    /// same notation as `from_marked`.
    pub fn marked(&self) -> String {
        let mut out = String::with_capacity(self.rope.len_chars() + 1);
        out.extend(self.rope.chars().take(self.cursor));
        out.push('|');
        out.extend(self.rope.chars().skip(self.cursor));
        out
    }

    pub fn batches_balanced(&self) -> bool {
        self.batch_depth == 0 && self.batches_begun == self.batches_ended
    }
}

impl TextSurface for MockSurface {
    fn text_before(&self, max_chars: usize) -> Option<String> {
        if !self.available {
            return None;
        }
        let start = self.cursor.saturating_sub(max_chars);
        Some(self.rope.slice(start..self.cursor).to_string())
    }

    fn text_after(&self, max_chars: usize) -> Option<String> {
        if !self.available {
            return None;
        }
        let end = (self.cursor + max_chars).min(self.rope.len_chars());
        Some(self.rope.slice(self.cursor..end).to_string())
    }

    fn selected_text(&self) -> Option<String> {
        self.selection
            .map(|(start, end)| self.rope.slice(start..end).to_string())
    }

    fn begin_batch(&mut self) {
        self.batch_depth += 1;
        self.batches_begun += 1;
    }

    fn end_batch(&mut self) {
        self.batch_depth -= 1;
        self.batches_ended += 1;
    }

    fn delete_surrounding(&mut self, before: usize, after: usize) {
        let start = self.cursor.saturating_sub(before);
        let end = (self.cursor + after).min(self.rope.len_chars());
        self.rope.remove(self.cursor..end);
        self.rope.remove(start..self.cursor);
        self.cursor = start;
    }

    fn commit_text(&mut self, text: &str, cursor: CursorPos) {
        if let Some((start, end)) = self.selection.take() {
            self.rope.remove(start..end);
            self.cursor = start;
        }
        self.rope.insert(self.cursor, text);
        if let CursorPos::After = cursor {
            self.cursor += text.chars().count();
        }
    }

    fn finish_composing(&mut self) {
        self.composing_finished += 1;
    }

    fn send_key(&mut self, key: RawKey) {
        self.raw_keys.push(key);
        match key {
            RawKey::Backspace => {
                if let Some((start, end)) = self.selection.take() {
                    self.rope.remove(start..end);
                    self.cursor = start;
                    return;
                }
                // Host-default delete removes one grapheme, not one char.
                let before = self.rope.slice(..self.cursor).to_string();
                if let Some(grapheme) = before.graphemes(true).next_back() {
                    let chars = grapheme.chars().count();
                    self.rope.remove(self.cursor - chars..self.cursor);
                    self.cursor -= chars;
                }
            }
            RawKey::Enter => {
                self.commit_text("\n", CursorPos::After);
            }
        }
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}

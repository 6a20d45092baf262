//! Benchmarks for md_keys edit planning and application.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use md_keys::traits::TextSurface;
use md_keys::types::{CursorPos, RawKey};
use md_keys::{Action, CursorContext, ListMarkerKind, perform_action, plan_edits};

/// Char-vector surface for benchmarking; no batching overhead to speak of.
struct BenchSurface {
    chars: Vec<char>,
    cursor: usize,
}

impl BenchSurface {
    fn new(text: &str, cursor: usize) -> Self {
        Self {
            chars: text.chars().collect(),
            cursor,
        }
    }
}

impl TextSurface for BenchSurface {
    fn text_before(&self, max_chars: usize) -> Option<String> {
        let start = self.cursor.saturating_sub(max_chars);
        Some(self.chars[start..self.cursor].iter().collect())
    }

    fn text_after(&self, max_chars: usize) -> Option<String> {
        let end = (self.cursor + max_chars).min(self.chars.len());
        Some(self.chars[self.cursor..end].iter().collect())
    }

    fn selected_text(&self) -> Option<String> {
        None
    }

    fn begin_batch(&mut self) {}

    fn end_batch(&mut self) {}

    fn delete_surrounding(&mut self, before: usize, after: usize) {
        let start = self.cursor.saturating_sub(before);
        let end = (self.cursor + after).min(self.chars.len());
        self.chars.drain(start..end);
        self.cursor = start;
    }

    fn commit_text(&mut self, text: &str, cursor: CursorPos) {
        let inserted: Vec<char> = text.chars().collect();
        let count = inserted.len();
        self.chars.splice(self.cursor..self.cursor, inserted);
        if let CursorPos::After = cursor {
            self.cursor += count;
        }
    }

    fn finish_composing(&mut self) {}

    fn send_key(&mut self, key: RawKey) {
        match key {
            RawKey::Backspace => {
                if self.cursor > 0 {
                    self.chars.remove(self.cursor - 1);
                    self.cursor -= 1;
                }
            }
            RawKey::Enter => self.commit_text("\n", CursorPos::After),
        }
    }

    fn hide(&mut self) {}
}

fn context(before: &str, after: &str) -> CursorContext {
    CursorContext {
        before: Some(before.to_owned()),
        after: Some(after.to_owned()),
        selection: None,
    }
}

fn benchmark_smart_delete_planning(c: &mut Criterion) {
    let paired = context("some text **", "** more text");
    let listed = context("notes\n- ", "");
    let plain = context("just some prose here", "and after");

    c.bench_function("plan smart delete", |b| {
        b.iter(|| {
            black_box(plan_edits(&Action::Delete, black_box(&paired)));
            black_box(plan_edits(&Action::Delete, black_box(&listed)));
            black_box(plan_edits(&Action::Delete, black_box(&plain)));
        });
    });
}

fn benchmark_enter_continuation_planning(c: &mut Criterion) {
    let ordered = context("        3. a reasonably long ordered list item", "");
    let checkbox = context("- [ ] groceries for the week", "");
    let plain = context("no marker on this line at all", "");

    c.bench_function("plan enter continuation", |b| {
        b.iter(|| {
            black_box(plan_edits(&Action::Enter, black_box(&ordered)));
            black_box(plan_edits(&Action::Enter, black_box(&checkbox)));
            black_box(plan_edits(&Action::Enter, black_box(&plain)));
        });
    });
}

fn benchmark_toggle_planning(c: &mut Criterion) {
    let empty = context("before", "after");
    let selected = CursorContext {
        before: Some("before ".to_owned()),
        after: Some(" after".to_owned()),
        selection: Some("the selected words".to_owned()),
    };

    c.bench_function("plan marker toggles", |b| {
        b.iter(|| {
            black_box(plan_edits(&Action::ToggleBold, black_box(&empty)));
            black_box(plan_edits(&Action::ToggleBold, black_box(&selected)));
            black_box(plan_edits(&Action::ToggleCode, black_box(&selected)));
        });
    });
}

fn benchmark_typing_stream(c: &mut Criterion) {
    c.bench_function("perform typing stream", |b| {
        b.iter(|| {
            let mut surface = BenchSurface::new("", 0);
            perform_action(
                &Action::InsertListMarker(ListMarkerKind::Unordered),
                &mut surface,
            );
            for word in ["write", " some", " markdown"] {
                perform_action(&Action::CommitLiteral(word.to_owned()), &mut surface);
            }
            perform_action(&Action::Enter, &mut surface);
            perform_action(&Action::ToggleBold, &mut surface);
            perform_action(&Action::Delete, &mut surface);
            perform_action(&Action::IndentForward, &mut surface);
            perform_action(&Action::IndentBack, &mut surface);
            black_box(surface.chars.len());
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = benchmark_smart_delete_planning,
              benchmark_enter_continuation_planning,
              benchmark_toggle_planning,
              benchmark_typing_stream
}
criterion_main!(benches);

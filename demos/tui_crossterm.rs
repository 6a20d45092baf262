//! Terminal soft-keyboard demo using crossterm and ratatui.
//!
//! This example demonstrates how to integrate md_keys into a host: terminal
//! key events are mapped onto the keyboard's key codes, resolved to actions,
//! and performed against an in-memory text surface.
//! Run with: cargo run --example tui_crossterm

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::io;

use md_keys::{
    KeyCode, KeyEvent, Modifiers, TextSurface, action_for, perform_action,
    types::{CursorPos, RawKey},
};

/// Char-vector surface; fine for a demo host. A real host would back this
/// with its own editor buffer.
struct DemoSurface {
    chars: Vec<char>,
    cursor: usize,
    hidden: bool,
}

impl DemoSurface {
    fn new() -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
            hidden: false,
        }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn cursor_line_col(&self) -> (u16, u16) {
        let mut line = 0u16;
        let mut col = 0u16;
        for &c in self.chars.iter().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

impl TextSurface for DemoSurface {
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
            // Char-level delete is enough for the demo.
            RawKey::Backspace => {
                if self.cursor > 0 {
                    self.chars.remove(self.cursor - 1);
                    self.cursor -= 1;
                }
            }
            RawKey::Enter => self.commit_text("\n", CursorPos::After),
        }
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}

/// Map a terminal key event onto the keyboard's key codes. Function keys
/// stand in for the markdown key row.
fn convert_crossterm_event(event: CKeyEvent) -> Option<KeyEvent> {
    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        CKeyCode::Backspace => KeyCode::Delete,
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Tab => KeyCode::IndentForward,
        CKeyCode::BackTab => KeyCode::IndentBack,
        CKeyCode::F(1) => KeyCode::Bold,
        CKeyCode::F(2) => KeyCode::Italic,
        CKeyCode::F(3) => KeyCode::Code,
        CKeyCode::F(4) => KeyCode::BulletList,
        CKeyCode::F(5) => KeyCode::NumberedList,
        CKeyCode::F(6) => KeyCode::TaskList,
        CKeyCode::Esc => KeyCode::Done,
        _ => return None,
    };
    let mods = if event.modifiers.contains(KeyModifiers::SHIFT) {
        Modifiers::SHIFT
    } else {
        Modifiers::empty()
    };
    Some(KeyEvent { code, mods })
}

fn ui(f: &mut Frame, surface: &DemoSurface) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(f.size());

    let lines: Vec<Line> = surface
        .text()
        .split('\n')
        .map(|line| Line::from(line.to_owned()))
        .collect();
    let text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("md_keys demo"),
    );
    f.render_widget(text, chunks[0]);

    let legend = "F1 bold  F2 italic  F3 code  F4 bullet  F5 numbered  F6 task  \
                  Tab indent  Shift-Tab unindent  Esc quit";
    let status = Paragraph::new(legend)
        .style(Style::default().add_modifier(Modifier::DIM))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);

    let (line, col) = surface.cursor_line_col();
    f.set_cursor(chunks[0].x + 1 + col, chunks[0].y + 1 + line);
}

fn main() -> Result<(), io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut surface = DemoSurface::new();

    loop {
        terminal.draw(|f| ui(f, &surface))?;

        if let Event::Key(key) = event::read()? {
            if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            if let Some(key_event) = convert_crossterm_event(key) {
                let action = action_for(key_event);
                perform_action(&action, &mut surface);
            }

            if surface.hidden {
                break;
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

use std::io::{self, stdout, IsTerminal, Read, Stdout};

use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::error::{GenError, Result};

pub const DDL_PROMPT: &str = "Please input your table DDL with semicolon at the end.";
pub const DDL_PLACEHOLDER: &str = "CREATE TABLE `user` (`id` int(11) NOT NULL AUTO_INCREMENT,`name` varchar(255) DEFAULT NULL,`age` int(11) DEFAULT NULL,`create_time` datetime DEFAULT NULL,`update_time` datetime DEFAULT NULL,PRIMARY KEY (`id`)) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;";
pub const JSON_PLACEHOLDER: &str = r#"{"name":"value"}"#;

/// Returns the input text, or `None` if the user dismissed the prompt.
///
/// Text passed on the command line wins; otherwise piped stdin is read in
/// full, and only an interactive terminal gets the prompt.
pub fn read_input(
    provided: Option<String>,
    prompt: &str,
    placeholder: &str,
) -> Result<Option<String>> {
    if let Some(text) = provided {
        return Ok(Some(text));
    }

    if !io::stdin().is_terminal() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        log::debug!("Read {} bytes from stdin", text.len());
        return Ok(Some(text));
    }

    run_text_prompt(prompt, placeholder)
}

/// RAII guard to ensure terminal state is restored even on panic
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().map_err(|e| prompt_error("Failed to enable raw mode", e))?;
        stdout()
            .execute(EnterAlternateScreen)
            .map_err(|e| prompt_error("Failed to enter alternate screen", e))?;
        stdout()
            .execute(EnableBracketedPaste)
            .map_err(|e| prompt_error("Failed to enable bracketed paste", e))?;
        Ok(Self { active: true })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = stdout().execute(DisableBracketedPaste);
            let _ = stdout().execute(LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}

fn prompt_error(context: &str, err: io::Error) -> GenError {
    GenError::Prompt(format!("{}: {}", context, err))
}

fn create_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| prompt_error("Failed to create terminal", e))
}

/// Single-line text buffer with a character cursor.
#[derive(Debug, Default)]
struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn insert_char(&mut self, c: char) {
        let index = self.byte_index();
        self.value.insert(index, c);
        self.cursor += 1;
    }

    /// Pasted text is flattened to one line.
    fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(if c == '\n' || c == '\r' { ' ' } else { c });
        }
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index();
            self.value.remove(index);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index();
            self.value.remove(index);
        }
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Submitted text, `None` when nothing was typed.
    fn submitted(self) -> Option<String> {
        if self.value.trim().is_empty() {
            None
        } else {
            Some(self.value)
        }
    }
}

enum PromptOutcome {
    Continue,
    Submit,
    Cancel,
}

fn handle_event(input: &mut TextInput, event: Event) -> PromptOutcome {
    match event {
        Event::Paste(text) => input.insert_str(&text),
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Enter => return PromptOutcome::Submit,
            KeyCode::Esc => return PromptOutcome::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return PromptOutcome::Cancel;
            }
            KeyCode::Char(c) => input.insert_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => {}
        },
        _ => {}
    }
    PromptOutcome::Continue
}

fn render_prompt(frame: &mut Frame, input: &TextInput, prompt: &str, placeholder: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(frame.area());

    let text = if input.value.is_empty() {
        Line::from(vec![
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        let (before, after) = input.value.split_at(input.byte_index());
        Line::from(vec![
            Span::raw(before),
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::raw(after),
        ])
    };

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", prompt))
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        );

    frame.render_widget(paragraph, chunks[0]);
    render_controls(frame, chunks[1]);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Line::from(vec![
        Span::styled("[ENTER]", Style::default().fg(Color::Green)),
        Span::raw(" Generate  "),
        Span::styled("[←→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Move  "),
        Span::styled("[ESC]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(controls), area);
}

fn run_text_prompt(prompt: &str, placeholder: &str) -> Result<Option<String>> {
    let _guard = TerminalGuard::new()?;
    let mut terminal = create_terminal()?;
    let mut input = TextInput::default();

    loop {
        terminal
            .draw(|frame| render_prompt(frame, &input, prompt, placeholder))
            .map_err(|e| prompt_error("Failed to draw UI", e))?;

        let event = event::read().map_err(|e| prompt_error("Failed to read event", e))?;
        match handle_event(&mut input, event) {
            PromptOutcome::Continue => {}
            PromptOutcome::Submit => return Ok(input.submitted()),
            PromptOutcome::Cancel => {
                log::debug!("Prompt cancelled by user");
                return Ok(None);
            }
        }
    }
}

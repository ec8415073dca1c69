//! Terminal User Interface
//!
//! The presentation layer for the puzzle session, built on ratatui

pub mod advance;
pub mod app;
pub mod widgets;

pub use advance::AutoAdvance;
pub use app::App;

use crate::data::Tone;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub success: Color,
    pub failure: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            failure: Color::Red,
            warning: Color::Yellow,
            border: Color::DarkGray,
            header: Color::Magenta,
            disabled: Color::DarkGray,
        }
    }
}

/// Get color for a feedback tone
pub fn tone_color(tone: &Tone) -> Color {
    match tone {
        Tone::Info => Color::Cyan,
        Tone::Hint => Color::Yellow,
        Tone::Success => Color::Green,
        Tone::Failure => Color::Red,
        Tone::Reveal => Color::Magenta,
        Tone::Warning => Color::Gray,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// Title screen art
pub const LOGO: &str = r#"
╔════════════════════════════════════════════════════╗
║                                                    ║
║   ███████╗███╗   ███╗ ██████╗      ██╗██╗          ║
║   ██╔════╝████╗ ████║██╔═══██╗     ██║██║          ║
║   █████╗  ██╔████╔██║██║   ██║     ██║██║          ║
║   ██╔══╝  ██║╚██╔╝██║██║   ██║██   ██║██║          ║
║   ███████╗██║ ╚═╝ ██║╚██████╔╝╚█████╔╝██║          ║
║   ╚══════╝╚═╝     ╚═╝ ╚═════╝  ╚════╝ ╚═╝          ║
║                                                    ║
║            S T O R Y   D E C O D E R               ║
║                                                    ║
║       Can you decode the emoji story?              ║
╚════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " 🔍 Emoji Story Decoder ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════╗
║                   CONTROLS                    ║
╠═══════════════════════════════════════════════╣
║  type        Edit your guess                  ║
║  Enter       Submit guess / next puzzle       ║
║  Tab, F2     Show hint (halves the points)    ║
║  F3, ^S      Skip (shows the answer)          ║
║  F5, ^N      New puzzle                       ║
║  F1          Toggle this help                 ║
║  Esc         Quit (shows your results)        ║
╠═══════════════════════════════════════════════╣
║                   SCORING                     ║
╠═══════════════════════════════════════════════╣
║  Solve without hints      +10                 ║
║  Solve after a hint        +5                 ║
║  Miss or skip          streak resets          ║
╚═══════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the play area layout (puzzle, guess, feedback, history, buttons)
pub fn create_play_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Emoji display
            Constraint::Length(3), // Guess input
            Constraint::Length(3), // Feedback
            Constraint::Min(3),    // History
            Constraint::Length(3), // Buttons
        ])
        .split(area)
        .to_vec()
}

/// Center a `width` x `height` box inside `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

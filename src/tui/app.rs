//! Main application state and rendering

use crate::config::{AdvanceConfig, Config};
use crate::data::Tone;
use crate::game::{Phase, Session, Verdict, WELCOME_MESSAGE};
use crate::tui::widgets::{CountdownBar, FeedbackLine, ResultBox};
use crate::tui::{
    centered_rect, create_main_layout, create_play_layout, styled_block, tone_color, AutoAdvance,
    Theme, HELP_TEXT, LOGO, SMALL_LOGO,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Entries on the title menu
const MENU_ITEMS: [&str; 3] = ["New Puzzle", "Help", "Quit"];

/// Application state
pub struct App<R = StdRng> {
    pub session: Session<R>,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub menu_state: ListState,
    pub advance: AdvanceConfig,
    pub tick_rate: Duration,
    pub auto_advance: AutoAdvance,
    /// Points from the latest solve, shown in the result box
    pub last_points: Option<u32>,
}

/// Current screen being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
    Summary,
}

impl App<StdRng> {
    pub fn new(config: &Config) -> Self {
        Self::with_session(Session::default(), config)
    }
}

impl<R: Rng> App<R> {
    pub fn with_session(session: Session<R>, config: &Config) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Self {
            session,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::Title,
            menu_state,
            advance: config.advance.clone(),
            tick_rate: config.ui.tick_rate(),
            auto_advance: AutoAdvance::default(),
            last_points: None,
        }
    }

    /// Wait up to one tick for a key, then run timers.
    ///
    /// Returns `false` once the player has quit.
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, Instant::now());
            }
        }
        self.tick(Instant::now());
        Ok(self.running)
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // Help is modal
        if self.show_help {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc | KeyCode::Enter) {
                self.show_help = false;
            }
            return;
        }
        if key.code == KeyCode::F(1) {
            self.show_help = true;
            return;
        }

        match self.current_screen {
            Screen::Title => self.handle_title_key(key),
            Screen::Playing => self.handle_playing_key(key, now),
            Screen::Summary => self.handle_summary_key(key),
        }
    }

    /// Fire the pending auto-advance if its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if self.current_screen != Screen::Playing || self.show_help {
            return;
        }
        if self.auto_advance.fire(now) && self.session.phase().is_resolved() {
            self.new_puzzle();
        }
    }

    fn handle_title_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Up => self.navigate_up(),
            KeyCode::Down => self.navigate_down(),
            KeyCode::Enter => self.handle_enter(),
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let active = self.session.is_active();

        match key.code {
            KeyCode::Esc => self.current_screen = Screen::Summary,
            KeyCode::F(5) => self.request_new_puzzle(),
            KeyCode::Char('n') if ctrl => self.request_new_puzzle(),
            KeyCode::F(3) => self.skip(now),
            KeyCode::Char('s') if ctrl => self.skip(now),
            KeyCode::Tab | KeyCode::F(2) => self.hint(),
            KeyCode::Enter if active => self.submit(now),
            KeyCode::Enter => self.request_new_puzzle(),
            KeyCode::Backspace if active => {
                self.session.pop_guess_char();
            }
            KeyCode::Char(c) if active && !ctrl => self.session.push_guess_char(c),
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('y') | KeyCode::Enter => self.quit(),
            KeyCode::Char('n') | KeyCode::Esc => self.current_screen = Screen::Playing,
            _ => {}
        }
    }

    fn navigate_up(&mut self) {
        let i = self.menu_state.selected().unwrap_or(0);
        if i > 0 {
            self.menu_state.select(Some(i - 1));
        }
    }

    fn navigate_down(&mut self) {
        let i = self.menu_state.selected().unwrap_or(0);
        if i + 1 < MENU_ITEMS.len() {
            self.menu_state.select(Some(i + 1));
        }
    }

    fn handle_enter(&mut self) {
        match self.menu_state.selected() {
            Some(0) => {
                self.current_screen = Screen::Playing;
                self.new_puzzle();
            }
            Some(1) => self.show_help = true,
            Some(2) => self.quit(),
            _ => {}
        }
    }

    /// The "New Puzzle" button, which is disabled mid-attempt
    fn request_new_puzzle(&mut self) {
        if !self.session.is_active() {
            self.new_puzzle();
        }
    }

    fn new_puzzle(&mut self) {
        self.auto_advance.cancel();
        self.last_points = None;
        self.session.start_new_puzzle();
    }

    fn submit(&mut self, now: Instant) {
        if let Ok(Verdict::Correct { points }) = self.session.submit_current_guess() {
            self.last_points = Some(points);
            self.schedule_advance(now);
        }
    }

    fn hint(&mut self) {
        if !self.session.is_active() {
            return;
        }
        if let Err(err) = self.session.reveal_hint() {
            debug!(%err, "hint unavailable");
        }
    }

    fn skip(&mut self, now: Instant) {
        if self.session.is_active() && self.session.skip_puzzle().is_ok() {
            self.schedule_advance(now);
        }
    }

    fn schedule_advance(&mut self, now: Instant) {
        if let Some(delay) = self.advance.delay_after(self.session.phase()) {
            self.auto_advance.schedule(now, delay);
        }
    }

    fn quit(&mut self) {
        self.auto_advance.cancel();
        self.running = false;

        let stats = self.session.stats();
        info!(
            score = self.session.score(),
            solved = stats.puzzles_solved,
            skipped = stats.puzzles_skipped,
            best_streak = stats.best_streak,
            "quitting"
        );
    }

    // === Rendering ===

    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::Title => self.render_title(frame),
            Screen::Playing => self.render_game(frame),
            Screen::Summary => {
                self.render_game(frame);
                self.render_summary_overlay(frame);
            }
        }

        // Overlay help if showing
        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_title(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg)),
            area,
        );

        let logo_height = LOGO.lines().count() as u16;
        let menu_height = MENU_ITEMS.len() as u16 + 2;

        // Compact mode skips the big logo
        let header_height = if area.height < logo_height + menu_height + 2 {
            3
        } else {
            logo_height
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Length(menu_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        if header_height == logo_height {
            let logo = Paragraph::new(LOGO)
                .style(Style::default().fg(self.theme.accent))
                .alignment(Alignment::Center);
            frame.render_widget(logo, chunks[0]);
        } else {
            let title = Paragraph::new(vec![
                Line::from(Span::styled(
                    SMALL_LOGO,
                    Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Can you decode the emoji story?",
                    Style::default().fg(self.theme.header),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(title, chunks[0]);
        }

        let menu_items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .map(|item| ListItem::new(format!("  ▶ {item}")))
            .collect();
        let menu = List::new(menu_items)
            .block(styled_block("Menu", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("→ ");
        let menu_area = centered_rect(30, menu_height, chunks[1]);
        frame.render_stateful_widget(menu, menu_area, &mut self.menu_state);

        let footer = Paragraph::new("↑/↓ choose | Enter select | F1 help | q quit")
            .style(Style::default().fg(self.theme.border))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);
    }

    fn render_game(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = create_main_layout(area);

        self.render_header(frame, layout[0]);

        let play = create_play_layout(layout[1]);
        self.render_puzzle(frame, play[0]);
        self.render_guess(frame, play[1]);
        self.render_feedback(frame, play[2]);
        self.render_history(frame, play[3]);
        self.render_buttons(frame, play[4]);

        self.render_status_bar(frame, layout[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(26),
                Constraint::Length(16),
                Constraint::Length(26),
            ])
            .split(area);

        let bordered = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));

        let logo = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(bordered.clone());
        frame.render_widget(logo, header_layout[0]);

        let score = Paragraph::new(format!("Score: {}", self.session.score()))
            .style(Style::default().fg(self.theme.success).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(bordered.clone());
        frame.render_widget(score, header_layout[1]);

        let streak = Paragraph::new(format!(
            "Streak: {} | Hints: {}",
            self.session.streak(),
            self.session.hints_used()
        ))
        .style(Style::default().fg(self.theme.warning))
        .alignment(Alignment::Center)
        .block(bordered);
        frame.render_widget(streak, header_layout[2]);
    }

    fn render_puzzle(&self, frame: &mut Frame, area: Rect) {
        let puzzle = self.session.current_puzzle();

        match (self.session.phase(), puzzle) {
            (Phase::Solved, Some(puzzle)) => {
                let points = self.last_points.unwrap_or_default();
                let result = ResultBox::new("CORRECT!")
                    .border_color(self.theme.success)
                    .content(vec![
                        format!("{}  =  {}", puzzle.emojis, puzzle.answer),
                        format!("+{} points, streak {}", points, self.session.streak()),
                        self.next_puzzle_prompt(),
                    ]);
                frame.render_widget(result, area);
            }
            (Phase::Skipped, Some(puzzle)) => {
                let result = ResultBox::new("SKIPPED")
                    .border_color(Color::Magenta)
                    .content(vec![
                        format!("{}  =  {}", puzzle.emojis, puzzle.answer),
                        "Streak reset".to_string(),
                        self.next_puzzle_prompt(),
                    ]);
                frame.render_widget(result, area);
            }
            (_, Some(puzzle)) => {
                let emojis = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        puzzle.emojis.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                ])
                .alignment(Alignment::Center)
                .block(styled_block("Decode this", &self.theme));
                frame.render_widget(emojis, area);
            }
            (_, None) => {
                let prompt = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        WELCOME_MESSAGE,
                        Style::default().fg(self.theme.border),
                    )),
                ])
                .alignment(Alignment::Center)
                .block(styled_block("Decode this", &self.theme));
                frame.render_widget(prompt, area);
            }
        }
    }

    fn next_puzzle_prompt(&self) -> String {
        if self.auto_advance.is_pending() {
            "Next puzzle coming up...".to_string()
        } else {
            "Press Enter for a new puzzle".to_string()
        }
    }

    fn render_guess(&self, frame: &mut Frame, area: Rect) {
        let active = self.session.is_active();

        let (text, style) = if !active {
            ("(waiting for a new puzzle)".to_string(), Style::default().fg(self.theme.disabled))
        } else if self.session.guess_text().is_empty() {
            ("Enter your guess..._".to_string(), Style::default().fg(self.theme.border))
        } else {
            (
                format!("{}_", self.session.guess_text()),
                Style::default().fg(self.theme.success),
            )
        };

        let input = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if active {
                    self.theme.success
                } else {
                    self.theme.border
                }))
                .title(" Guess "),
        );
        frame.render_widget(input, area);
    }

    fn render_feedback(&self, frame: &mut Frame, area: Rect) {
        let block = styled_block("Feedback", &self.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let feedback = self.session.feedback();
        if feedback.is_empty() {
            return;
        }
        let tone = self
            .session
            .feedback_log()
            .last()
            .filter(|entry| entry.message == feedback)
            .map_or(Tone::Info, |entry| entry.tone);
        frame.render_widget(FeedbackLine::new(feedback, tone), inner);
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let log = self.session.feedback_log();
        let skip = log.len().saturating_sub(visible);

        let lines: Vec<Line> = log
            .iter()
            .skip(skip)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.timestamp.format("%H:%M:%S")),
                        Style::default().fg(self.theme.border),
                    ),
                    Span::styled(
                        format!("[{}] ", entry.tone),
                        Style::default().fg(tone_color(&entry.tone)),
                    ),
                    Span::raw(entry.message.as_str()),
                ])
            })
            .collect();

        let history = Paragraph::new(lines)
            .block(styled_block("History", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(history, area);
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect) {
        let active = self.session.is_active();
        let buttons = [
            ("F5", "New Puzzle", !active),
            ("Enter", "Submit Guess", active),
            ("Tab", "Show Hint", active),
            ("F3", "Skip", active),
        ];

        let mut spans = Vec::new();
        for (key, label, enabled) in buttons {
            let style = if enabled {
                Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.disabled)
            };
            spans.push(Span::styled(format!(" [{key}] {label} "), style));
            spans.push(Span::raw(" "));
        }

        let bar = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border)),
            );
        frame.render_widget(bar, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(progress) = self.auto_advance.progress(Instant::now()) {
            frame.render_widget(
                CountdownBar::new(" Next puzzle", progress).color(self.theme.accent),
                area,
            );
            return;
        }

        let stats = self.session.stats();
        let status_text = format!(
            " Solved: {} | Skipped: {} | Best streak: {} | F1 help | Esc quit ",
            stats.puzzles_solved, stats.puzzles_skipped, stats.best_streak,
        );
        let status = Paragraph::new(status_text)
            .style(Style::default().fg(self.theme.fg).bg(Color::DarkGray));
        frame.render_widget(status, area);
    }

    fn render_summary_overlay(&self, frame: &mut Frame) {
        let popup_area = centered_rect(44, 13, frame.area());
        frame.render_widget(Clear, popup_area);

        let stats = self.session.stats();
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Final score: {}", self.session.score()),
                Style::default().fg(self.theme.success).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Puzzles solved:  {}", stats.puzzles_solved)),
            Line::from(format!("Puzzles skipped: {}", stats.puzzles_skipped)),
            Line::from(format!("Hints used:      {}", stats.hints_revealed)),
            Line::from(format!("Best streak:     {}", stats.best_streak)),
            Line::from(""),
            Line::from("Quit now? Enter/Q to quit, Esc to keep playing"),
        ];

        let summary = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.warning))
                    .title(" Results "),
            );
        frame.render_widget(summary, popup_area);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = centered_rect(53, 21, area);

        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent)),
            );
        frame.render_widget(help, popup_area);
    }
}

impl Default for App<StdRng> {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdvancePolicy;
    use crate::data::{Catalog, Puzzle};
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    fn app_with(policy: AdvancePolicy) -> App {
        let catalog = Catalog::new(vec![Puzzle::new("🦈", "Jaws", "bigger boat")]).unwrap();
        let session = Session::with_rng(catalog, StdRng::seed_from_u64(1));
        let mut config = Config::default();
        config.advance.policy = policy;
        App::with_session(session, &config)
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn ctrl(app: &mut App, c: char, now: Instant) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), now);
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    fn started(policy: AdvancePolicy) -> (App, Instant) {
        let mut app = app_with(policy);
        let now = Instant::now();
        press(&mut app, KeyCode::Enter, now);
        (app, now)
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn title_menu_starts_a_puzzle() {
        let (app, _) = started(AdvancePolicy::Manual);
        assert_eq!(app.current_screen, Screen::Playing);
        assert!(app.session.is_active());
        assert_eq!(app.session.emojis(), Some("🦈"));
    }

    #[test]
    fn typing_and_enter_submit_a_guess() {
        let (mut app, now) = started(AdvancePolicy::Manual);
        type_text(&mut app, "jawz", now);
        press(&mut app, KeyCode::Backspace, now);
        type_text(&mut app, "s", now);
        assert_eq!(app.session.guess_text(), "jaws");

        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.session.score(), 10);
        assert_eq!(app.session.phase(), Phase::Solved);
        assert_eq!(app.last_points, Some(10));
    }

    #[test]
    fn keys_are_ignored_while_resolved() {
        let (mut app, now) = started(AdvancePolicy::Manual);
        type_text(&mut app, "jaws", now);
        press(&mut app, KeyCode::Enter, now);

        type_text(&mut app, "x", now);
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.session.guess_text(), "jaws");
        assert_eq!(app.session.hints_used(), 0);
        assert_eq!(app.session.feedback(), "🎉 Correct! It was \"Jaws\"");
    }

    #[test]
    fn hint_then_solve_scores_five() {
        let (mut app, now) = started(AdvancePolicy::Manual);
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.session.hints_used(), 1);

        type_text(&mut app, "JAWS", now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.session.score(), 5);
    }

    #[test]
    fn new_puzzle_is_disabled_mid_attempt() {
        let (mut app, now) = started(AdvancePolicy::Manual);
        press(&mut app, KeyCode::Tab, now);
        press(&mut app, KeyCode::F(5), now);
        ctrl(&mut app, 'n', now);

        assert_eq!(app.session.stats().puzzles_started, 1);
        assert_eq!(app.session.hints_used(), 1);
    }

    #[test]
    fn manual_policy_waits_for_the_player() {
        let (mut app, now) = started(AdvancePolicy::Manual);
        ctrl(&mut app, 's', now);
        assert_eq!(app.session.phase(), Phase::Skipped);
        assert!(!app.auto_advance.is_pending());

        app.tick(now + Duration::from_secs(60));
        assert_eq!(app.session.phase(), Phase::Skipped);

        press(&mut app, KeyCode::Enter, now);
        assert!(app.session.is_active());
        assert_eq!(app.session.stats().puzzles_started, 2);
    }

    #[test]
    fn auto_policy_advances_after_delay() {
        let (mut app, now) = started(AdvancePolicy::Auto);
        type_text(&mut app, "jaws", now);
        press(&mut app, KeyCode::Enter, now);
        assert!(app.auto_advance.is_pending());

        app.tick(now + Duration::from_millis(1000));
        assert_eq!(app.session.phase(), Phase::Solved);

        app.tick(now + Duration::from_millis(1500));
        assert!(app.session.is_active());
        assert_eq!(app.session.stats().puzzles_started, 2);
        assert!(!app.auto_advance.is_pending());
    }

    #[test]
    fn manual_advance_cancels_pending_timer() {
        let (mut app, now) = started(AdvancePolicy::Auto);
        press(&mut app, KeyCode::F(3), now);
        assert!(app.auto_advance.is_pending());

        press(&mut app, KeyCode::F(5), now);
        assert!(!app.auto_advance.is_pending());
        assert_eq!(app.session.stats().puzzles_started, 2);

        // the old deadline must not draw a third puzzle
        app.tick(now + Duration::from_secs(5));
        assert_eq!(app.session.stats().puzzles_started, 2);
    }

    #[test]
    fn timer_waits_while_summary_is_open() {
        let (mut app, now) = started(AdvancePolicy::Auto);
        press(&mut app, KeyCode::F(3), now);
        press(&mut app, KeyCode::Esc, now);
        assert_eq!(app.current_screen, Screen::Summary);

        app.tick(now + Duration::from_secs(5));
        assert_eq!(app.session.phase(), Phase::Skipped);

        press(&mut app, KeyCode::Esc, now);
        app.tick(now + Duration::from_secs(5));
        assert!(app.session.is_active());
    }

    #[test]
    fn quitting_from_summary_stops_the_app() {
        let (mut app, now) = started(AdvancePolicy::Auto);
        press(&mut app, KeyCode::F(3), now);
        press(&mut app, KeyCode::Esc, now);
        press(&mut app, KeyCode::Char('q'), now);

        assert!(!app.running);
        assert!(!app.auto_advance.is_pending());
    }

    #[test]
    fn timer_waits_while_help_is_open() {
        let (mut app, now) = started(AdvancePolicy::Auto);
        press(&mut app, KeyCode::F(3), now);
        press(&mut app, KeyCode::F(1), now);
        assert!(app.show_help);

        app.tick(now + Duration::from_secs(5));
        assert_eq!(app.session.phase(), Phase::Skipped);
        assert!(app.auto_advance.is_pending());

        press(&mut app, KeyCode::F(1), now);
        app.tick(now + Duration::from_secs(5));
        assert!(app.session.is_active());
        assert_eq!(app.session.stats().puzzles_started, 2);
    }

    #[test]
    fn help_is_modal() {
        let (mut app, now) = started(AdvancePolicy::Manual);
        press(&mut app, KeyCode::F(1), now);
        assert!(app.show_help);

        type_text(&mut app, "jaws", now);
        assert_eq!(app.session.guess_text(), "");

        press(&mut app, KeyCode::Esc, now);
        assert!(!app.show_help);
        assert_eq!(app.current_screen, Screen::Playing);
    }

    #[test]
    fn renders_every_screen() {
        let mut app = app_with(AdvancePolicy::Auto);
        assert!(screen_text(&mut app).contains("New Puzzle"));

        let now = Instant::now();
        press(&mut app, KeyCode::Enter, now);
        let playing = screen_text(&mut app);
        assert!(playing.contains("Score: 0"));
        assert!(playing.contains("Submit Guess"));

        type_text(&mut app, "jaws", now);
        press(&mut app, KeyCode::Enter, now);
        let solved = screen_text(&mut app);
        assert!(solved.contains("CORRECT!"));
        assert!(solved.contains("Score: 10"));

        press(&mut app, KeyCode::Esc, now);
        assert!(screen_text(&mut app).contains("Final score: 10"));

        app.show_help = true;
        assert!(screen_text(&mut app).contains("CONTROLS"));
    }
}

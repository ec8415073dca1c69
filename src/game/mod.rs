//! Core game logic and state management

pub mod feedback;
pub mod matching;

pub use feedback::{Feedback, FeedbackLog};

use crate::data::{Catalog, Puzzle, Tone};
use crate::GameError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Points for a solve without hints
pub const CLEAN_SOLVE_POINTS: u32 = 10;

/// Points for a solve after at least one hint
pub const HINTED_SOLVE_POINTS: u32 = 5;

/// Shown before the first puzzle is drawn
pub const WELCOME_MESSAGE: &str = "Click \"New Puzzle\" to start!";

/// Where the current attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NoPuzzle,
    Active,
    Solved,
    Skipped,
}

impl Phase {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Phase::Solved | Phase::Skipped)
    }
}

/// Outcome of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct { points: u32 },
    Incorrect,
}

/// Running totals for one sitting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub puzzles_started: u32,
    pub puzzles_solved: u32,
    pub puzzles_skipped: u32,
    pub guesses: u32,
    pub misses: u32,
    pub hints_revealed: u32,
    pub best_streak: u32,
}

/// The puzzle session
///
/// Owns the catalog and every counter the player sees. All operations are
/// synchronous; scheduling the next puzzle after a resolution is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    catalog: Catalog,
    rng: R,
    score: u32,
    streak: u32,
    hints_used: u32,
    current: Option<usize>,
    guess: String,
    feedback: String,
    phase: Phase,
    stats: SessionStats,
    log: FeedbackLog,
}

impl Session<StdRng> {
    /// Create a session seeded from OS entropy
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<R: Rng> Session<R> {
    /// Create a session drawing puzzles with the given random source
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        let mut log = FeedbackLog::default();
        log.push(Feedback::new(Tone::Info, WELCOME_MESSAGE));

        Self {
            catalog,
            rng,
            score: 0,
            streak: 0,
            hints_used: 0,
            current: None,
            guess: String::new(),
            feedback: WELCOME_MESSAGE.to_string(),
            phase: Phase::NoPuzzle,
            stats: SessionStats::default(),
            log,
        }
    }

    // === Query Methods ===

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.current.and_then(|index| self.catalog.get(index))
    }

    /// Emoji string of the current puzzle, if any
    pub fn emojis(&self) -> Option<&str> {
        self.current_puzzle().map(|puzzle| puzzle.emojis.as_str())
    }

    pub fn guess_text(&self) -> &str {
        &self.guess
    }

    /// Latest status line; empty right after a new puzzle is drawn
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn feedback_log(&self) -> &FeedbackLog {
        &self.log
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // === Guess Buffer ===

    pub fn update_guess(&mut self, text: &str) {
        self.guess.clear();
        self.guess.push_str(text);
    }

    pub fn push_guess_char(&mut self, c: char) {
        self.guess.push(c);
    }

    pub fn pop_guess_char(&mut self) -> Option<char> {
        self.guess.pop()
    }

    pub fn clear_guess(&mut self) {
        self.guess.clear();
    }

    // === Mutation Methods ===

    /// Draw a puzzle uniformly at random and make it active.
    ///
    /// Repeats of the previous puzzle are allowed.
    pub fn start_new_puzzle(&mut self) -> &Puzzle {
        let (index, puzzle) = self.catalog.draw(&mut self.rng);

        self.current = Some(index);
        self.guess.clear();
        self.hints_used = 0;
        self.feedback.clear();
        self.phase = Phase::Active;
        self.stats.puzzles_started += 1;
        self.log.push(Feedback::new(
            Tone::Info,
            format!("Puzzle #{} drawn", self.stats.puzzles_started),
        ));

        info!(index, started = self.stats.puzzles_started, "new puzzle");
        debug!(answer = %puzzle.answer, "answer");

        puzzle
    }

    /// Check `raw` against the current answer.
    ///
    /// Blank input and calls without an active puzzle are rejected without
    /// touching score, streak or phase.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Verdict, GameError> {
        let index = match self.active_index() {
            Ok(index) => index,
            Err(err) => return Err(self.reject(err)),
        };
        if raw.trim().is_empty() {
            return Err(self.reject(GameError::EmptyGuess));
        }

        let answer = match self.catalog.get(index) {
            Some(puzzle) => puzzle.answer.clone(),
            None => return Err(self.reject(GameError::NoActivePuzzle)),
        };
        self.stats.guesses += 1;

        if matching::is_match(raw, &answer) {
            let points = if self.hints_used == 0 {
                CLEAN_SOLVE_POINTS
            } else {
                HINTED_SOLVE_POINTS
            };
            self.score += points;
            self.streak += 1;
            self.stats.best_streak = self.stats.best_streak.max(self.streak);
            self.stats.puzzles_solved += 1;
            self.phase = Phase::Solved;
            self.say(Tone::Success, format!("🎉 Correct! It was \"{answer}\""));

            info!(points, score = self.score, streak = self.streak, "puzzle solved");
            Ok(Verdict::Correct { points })
        } else {
            let lost = self.streak;
            self.streak = 0;
            self.stats.misses += 1;
            self.say(Tone::Failure, "❌ Not quite right. Try again!");

            debug!(guess = raw.trim(), lost_streak = lost, "wrong guess");
            Ok(Verdict::Incorrect)
        }
    }

    /// Submit whatever is in the guess buffer
    pub fn submit_current_guess(&mut self) -> Result<Verdict, GameError> {
        let guess = self.guess.clone();
        self.submit_guess(&guess)
    }

    /// Reveal the current puzzle's hint, lowering its reward.
    pub fn reveal_hint(&mut self) -> Result<&str, GameError> {
        let index = match self.active_index() {
            Ok(index) => index,
            Err(err) => return Err(self.reject(err)),
        };
        let hint = match self.catalog.get(index) {
            Some(puzzle) => puzzle.hint.clone(),
            None => return Err(self.reject(GameError::NoActivePuzzle)),
        };

        self.hints_used += 1;
        self.stats.hints_revealed += 1;
        self.say(Tone::Hint, format!("💡 Hint: {hint}"));

        debug!(hints_used = self.hints_used, "hint revealed");
        Ok(self.current_puzzle().map_or("", |puzzle| puzzle.hint.as_str()))
    }

    /// Give up on the current puzzle and show its answer.
    ///
    /// The next puzzle is not drawn here.
    pub fn skip_puzzle(&mut self) -> Result<&str, GameError> {
        let index = match self.active_index() {
            Ok(index) => index,
            Err(err) => return Err(self.reject(err)),
        };
        let answer = match self.catalog.get(index) {
            Some(puzzle) => puzzle.answer.clone(),
            None => return Err(self.reject(GameError::NoActivePuzzle)),
        };

        self.streak = 0;
        self.phase = Phase::Skipped;
        self.stats.puzzles_skipped += 1;
        self.say(Tone::Reveal, format!("⏭️ The answer was: \"{answer}\""));

        info!(skipped = self.stats.puzzles_skipped, "puzzle skipped");
        Ok(self.current_puzzle().map_or("", |puzzle| puzzle.answer.as_str()))
    }

    fn active_index(&self) -> Result<usize, GameError> {
        match (self.phase, self.current) {
            (Phase::Active, Some(index)) => Ok(index),
            _ => Err(GameError::NoActivePuzzle),
        }
    }

    fn say(&mut self, tone: Tone, message: impl Into<String>) {
        let feedback = Feedback::new(tone, message);
        self.feedback.clone_from(&feedback.message);
        self.log.push(feedback);
    }

    fn reject(&mut self, err: GameError) -> GameError {
        debug!(%err, phase = ?self.phase, "rejected");
        self.say(Tone::Warning, err.to_string());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn jaws() -> Session {
        let catalog = Catalog::new(vec![Puzzle::new("🦈", "Jaws", "bigger boat")]).unwrap();
        Session::with_rng(catalog, StdRng::seed_from_u64(7))
    }

    fn spider_man() -> Session {
        let catalog = Catalog::new(vec![Puzzle::new(
            "🕷️👨",
            "Spider-Man",
            "Marvel superhero who shoots webs",
        )])
        .unwrap();
        Session::with_rng(catalog, StdRng::seed_from_u64(7))
    }

    #[test]
    fn fresh_session_waits_for_first_puzzle() {
        let session = jaws();
        assert_eq!(session.phase(), Phase::NoPuzzle);
        assert!(session.current_puzzle().is_none());
        assert_eq!(session.feedback(), WELCOME_MESSAGE);
        assert_eq!((session.score(), session.streak(), session.hints_used()), (0, 0, 0));
    }

    #[test]
    fn start_new_puzzle_resets_attempt_state() {
        let mut session = jaws();
        session.start_new_puzzle();
        session.reveal_hint().unwrap();
        session.update_guess("sharks");
        session.skip_puzzle().unwrap();

        let puzzle = session.start_new_puzzle().clone();
        assert_eq!(puzzle.emojis, "🦈");
        assert_eq!(session.hints_used(), 0);
        assert_eq!(session.guess_text(), "");
        assert_eq!(session.feedback(), "");
        assert!(session.is_active());
    }

    #[test]
    fn draws_always_come_from_the_catalog() {
        let mut session = Session::with_rng(Catalog::builtin(), StdRng::seed_from_u64(42));
        for _ in 0..50 {
            let drawn = session.start_new_puzzle().clone();
            assert!(session.catalog().iter().any(|p| *p == drawn));
            assert!(session.is_active());
        }
        assert_eq!(session.stats().puzzles_started, 50);
    }

    #[test]
    fn clean_solve_scores_ten() {
        let mut session = jaws();
        session.start_new_puzzle();

        assert_eq!(
            session.submit_guess("jaws"),
            Ok(Verdict::Correct { points: CLEAN_SOLVE_POINTS })
        );
        assert_eq!(session.score(), 10);
        assert_eq!(session.streak(), 1);
        assert!(!session.is_active());
        assert_eq!(session.phase(), Phase::Solved);
        assert_eq!(session.feedback(), "🎉 Correct! It was \"Jaws\"");
    }

    #[test]
    fn hinted_solve_scores_five() {
        let mut session = jaws();
        session.start_new_puzzle();
        assert_eq!(session.reveal_hint(), Ok("bigger boat"));
        assert_eq!(session.hints_used(), 1);

        assert_eq!(
            session.submit_guess("Jaws"),
            Ok(Verdict::Correct { points: HINTED_SOLVE_POINTS })
        );
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn two_hints_leave_phase_and_score_alone() {
        let mut session = jaws();
        session.start_new_puzzle();
        session.reveal_hint().unwrap();
        session.reveal_hint().unwrap();

        assert_eq!(session.hints_used(), 2);
        assert!(session.is_active());
        assert_eq!(session.score(), 0);
        assert_eq!(session.feedback(), "💡 Hint: bigger boat");
    }

    #[test]
    fn stripped_form_matches() {
        let mut session = spider_man();
        for guess in ["spiderman", "spider-man", "Spider Man", " SPIDERMAN "] {
            session.start_new_puzzle();
            assert!(matches!(session.submit_guess(guess), Ok(Verdict::Correct { .. })));
        }
        assert_eq!(session.streak(), 4);
        assert_eq!(session.stats().best_streak, 4);
    }

    #[test]
    fn miss_resets_streak_and_keeps_puzzle_open() {
        let mut session = jaws();
        for _ in 0..3 {
            session.start_new_puzzle();
            session.submit_guess("jaws").unwrap();
        }
        assert_eq!(session.streak(), 3);

        session.start_new_puzzle();
        assert_eq!(session.submit_guess("Alien"), Ok(Verdict::Incorrect));
        assert_eq!(session.streak(), 0);
        assert_eq!(session.score(), 30);
        assert!(session.is_active());
        assert_eq!(session.feedback(), "❌ Not quite right. Try again!");

        // retry is allowed
        assert!(matches!(session.submit_guess("JAWS"), Ok(Verdict::Correct { .. })));
        assert_eq!(session.streak(), 1);
        assert_eq!(session.stats().best_streak, 3);
    }

    #[test]
    fn blank_guess_changes_nothing() {
        let mut session = jaws();
        session.start_new_puzzle();
        session.submit_guess("jaws").unwrap();
        session.start_new_puzzle();

        for blank in ["", "   ", "\t\n"] {
            assert_eq!(session.submit_guess(blank), Err(GameError::EmptyGuess));
            assert_eq!(session.score(), 10);
            assert_eq!(session.streak(), 1);
            assert!(session.is_active());
            assert_eq!(session.feedback(), "Please enter your guess!");
        }
        assert_eq!(session.stats().guesses, 1);
    }

    #[test]
    fn calls_without_a_puzzle_are_safe() {
        let mut session = jaws();

        assert_eq!(session.submit_guess("jaws"), Err(GameError::NoActivePuzzle));
        assert_eq!(session.reveal_hint(), Err(GameError::NoActivePuzzle));
        assert_eq!(session.skip_puzzle(), Err(GameError::NoActivePuzzle));

        assert_eq!(session.phase(), Phase::NoPuzzle);
        assert_eq!((session.score(), session.streak(), session.hints_used()), (0, 0, 0));
        assert_eq!(session.feedback(), WELCOME_MESSAGE);
    }

    #[test]
    fn resolved_puzzle_cannot_be_scored_twice() {
        let mut session = jaws();
        session.start_new_puzzle();
        session.submit_guess("jaws").unwrap();

        assert_eq!(session.submit_guess("jaws"), Err(GameError::NoActivePuzzle));
        assert_eq!(session.reveal_hint(), Err(GameError::NoActivePuzzle));
        assert_eq!(session.skip_puzzle(), Err(GameError::NoActivePuzzle));
        assert_eq!(session.score(), 10);
        assert_eq!(session.streak(), 1);
        assert_eq!(session.phase(), Phase::Solved);
    }

    #[test]
    fn skip_reveals_answer_without_scoring() {
        let mut session = jaws();
        session.start_new_puzzle();
        session.submit_guess("jaws").unwrap();
        session.start_new_puzzle();

        assert_eq!(session.skip_puzzle(), Ok("Jaws"));
        assert_eq!(session.streak(), 0);
        assert_eq!(session.score(), 10);
        assert_eq!(session.phase(), Phase::Skipped);
        assert!(session.phase().is_resolved());
        assert_eq!(session.feedback(), "⏭️ The answer was: \"Jaws\"");
        assert_eq!(session.current_puzzle().map(|p| p.answer.as_str()), Some("Jaws"));
    }

    #[test]
    fn guess_buffer_edits_and_submits() {
        let mut session = jaws();
        session.start_new_puzzle();
        for c in "jawz".chars() {
            session.push_guess_char(c);
        }
        assert_eq!(session.pop_guess_char(), Some('z'));
        session.push_guess_char('s');
        assert_eq!(session.guess_text(), "jaws");

        assert!(matches!(session.submit_current_guess(), Ok(Verdict::Correct { .. })));
    }

    #[test]
    fn feedback_log_tracks_history() {
        let mut session = jaws();
        session.start_new_puzzle();
        session.submit_guess("alien").unwrap();
        session.reveal_hint().unwrap();

        let tones: Vec<Tone> = session.feedback_log().iter().map(|f| f.tone).collect();
        assert_eq!(tones, vec![Tone::Info, Tone::Info, Tone::Failure, Tone::Hint]);
    }

    #[test]
    #[traced_test]
    fn solves_are_logged() {
        let mut session = jaws();
        session.start_new_puzzle();
        session.submit_guess("jaws").unwrap();

        assert!(logs_contain("new puzzle"));
        assert!(logs_contain("puzzle solved"));
    }
}

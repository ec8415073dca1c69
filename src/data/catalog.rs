//! The fixed set of puzzles a session draws from

use super::Puzzle;
use crate::GameError;
use rand::Rng;
use serde::Serialize;

/// Ordered, validated, never-empty list of puzzles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// Validate and wrap a list of puzzles.
    ///
    /// Every puzzle needs a non-empty `emojis` and `answer`; an empty list is
    /// rejected since there would be nothing to draw.
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, GameError> {
        if puzzles.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        for (index, puzzle) in puzzles.iter().enumerate() {
            if puzzle.emojis.trim().is_empty() {
                return Err(GameError::InvalidPuzzle { index, field: "emojis" });
            }
            if puzzle.answer.trim().is_empty() {
                return Err(GameError::InvalidPuzzle { index, field: "answer" });
            }
        }

        Ok(Self { puzzles })
    }

    /// The movies bundled with the game
    pub fn builtin() -> Self {
        Self {
            puzzles: movies(),
        }
    }

    /// Pick a puzzle uniformly at random, returning it with its index
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, &Puzzle) {
        let index = rng.gen_range(0..self.puzzles.len());
        (index, &self.puzzles[index])
    }

    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn movies() -> Vec<Puzzle> {
    vec![
        Puzzle::new("🦁👑", "The Lion King", "Disney animated classic about a young prince"),
        Puzzle::new("🕷️👨", "Spider-Man", "Marvel superhero who shoots webs"),
        Puzzle::new("❄️👸", "Frozen", "Let it go, let it go..."),
        Puzzle::new("🍕🏠", "Home Alone", "Kevin defends his house"),
        Puzzle::new("🚢🧊💔", "Titanic", "Jack and Rose's tragic love story"),
        Puzzle::new("🦈", "Jaws", "You're gonna need a bigger boat"),
        Puzzle::new("🧙‍♂️💍", "Lord of the Rings", "One ring to rule them all"),
        Puzzle::new("🤖🚗", "Transformers", "Robots in disguise"),
        Puzzle::new("👻👻👻", "Ghostbusters", "Who you gonna call?"),
        Puzzle::new("🎪🐘", "Dumbo", "Flying elephant with big ears"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_puzzles_are_complete() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 10);
        for puzzle in catalog.iter() {
            assert!(!puzzle.emojis.is_empty());
            assert!(!puzzle.answer.is_empty());
        }
    }

    #[test]
    fn builtin_passes_validation() {
        let puzzles: Vec<Puzzle> = Catalog::builtin().iter().cloned().collect();
        assert!(Catalog::new(puzzles).is_ok());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(vec![]), Err(GameError::EmptyCatalog));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let puzzles = vec![
            Puzzle::new("🦈", "Jaws", "bigger boat"),
            Puzzle::new("🎪🐘", "   ", "Flying elephant"),
        ];
        assert_eq!(
            Catalog::new(puzzles),
            Err(GameError::InvalidPuzzle { index: 1, field: "answer" })
        );

        let puzzles = vec![Puzzle::new("", "Jaws", "bigger boat")];
        assert_eq!(
            Catalog::new(puzzles),
            Err(GameError::InvalidPuzzle { index: 0, field: "emojis" })
        );
    }

    #[test]
    fn an_empty_hint_is_allowed() {
        let catalog = Catalog::new(vec![Puzzle::new("🦈", "Jaws", "")]).unwrap();
        assert_eq!(catalog.get(0).map(|p| p.answer.as_str()), Some("Jaws"));
        assert!(catalog.get(1).is_none());
    }
}

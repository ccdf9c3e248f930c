/// The scoreboard panel at the top of the game screen: score, projectile
/// inventory, the current question and the answer being typed.

use rand::Rng;

use crate::entities::Difficulty;
use crate::question::{check_answer, generate, Question};

/// The ninja starts with this IQ.
pub const STARTING_SCORE: i64 = 75;

/// Keys the panel reacts to while the player types an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKey {
    Digit(u8),
    Minus,
    Backspace,
    Submit,
}

#[derive(Clone, Debug)]
pub struct Panel {
    difficulty: Difficulty,
    score: i64,
    inventory: u32,
    question: Question,
    pending_input: String,
}

impl Panel {
    pub fn new(difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        Panel {
            difficulty,
            score: STARTING_SCORE,
            inventory: 0,
            question: generate(difficulty, rng),
            pending_input: String::new(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn handle_key(&mut self, key: PanelKey, rng: &mut impl Rng) {
        match key {
            PanelKey::Digit(d) if d <= 9 => self.pending_input.push(char::from(b'0' + d)),
            PanelKey::Digit(_) => {}
            PanelKey::Minus => {
                // Only as a leading sign.
                if self.pending_input.is_empty() {
                    self.pending_input.push('-');
                }
            }
            PanelKey::Backspace => {
                self.pending_input.pop();
            }
            PanelKey::Submit => self.submit(rng),
        }
    }

    fn submit(&mut self, rng: &mut impl Rng) {
        if self.pending_input.is_empty() || self.pending_input == "-" {
            return;
        }
        if check_answer(&self.question, &self.pending_input) {
            self.inventory += 1;
            tracing::debug!(
                question = %self.question,
                inventory = self.inventory,
                "correct answer"
            );
            self.question = generate(self.difficulty, rng);
        } else {
            tracing::debug!(
                question = %self.question,
                submitted = %self.pending_input,
                "wrong answer"
            );
        }
        self.pending_input.clear();
    }

    /// Reward for one confirmed kill.
    pub fn add_score(&mut self) {
        self.score += match self.difficulty {
            Difficulty::Easy => 5,
            Difficulty::Hard => 10,
        };
    }

    /// Callers check `inventory() > 0` first; an empty inventory stays at 0.
    pub fn spend_projectile(&mut self) {
        self.inventory = self.inventory.saturating_sub(1);
    }
}

/// Arithmetic challenges that gate the projectile supply.
///
/// Generation takes the RNG as a parameter so callers decide between a
/// seeded generator (tests) and an entropy-seeded one (the game).

use std::fmt;

use rand::Rng;

use crate::entities::Difficulty;

// ── Operand ranges ───────────────────────────────────────────────────────────

const EASY_A_MAX: i32 = 9;
const EASY_B_MAX: i32 = 9;
const HARD_A_MAX: i32 = 12;
const HARD_B_MAX: i32 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => 'x',
            Operator::Div => '/',
        }
    }

    /// `b` must be non-zero for `Div`; generation guarantees it.
    fn apply(&self, a: i32, b: i32) -> i32 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => a / b,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub operand_a: i32,
    pub operand_b: i32,
    pub operator: Operator,
    pub answer: i32,
    pub difficulty: Difficulty,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} =",
            self.operand_a,
            self.operator.symbol(),
            self.operand_b
        )
    }
}

// ── Generation ───────────────────────────────────────────────────────────────

/// Draw a fresh question for the given difficulty.
///
/// Easy mode is the times table (0–9 × 1–9).  Hard mode picks any of the four
/// operators over 0–12 and 1–12; a division is redrawn until it is exact.
pub fn generate(difficulty: Difficulty, rng: &mut impl Rng) -> Question {
    let (operand_a, operand_b, operator) = match difficulty {
        Difficulty::Easy => (
            rng.gen_range(0..=EASY_A_MAX),
            rng.gen_range(1..=EASY_B_MAX),
            Operator::Mul,
        ),
        Difficulty::Hard => {
            let operator = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];
            (
                rng.gen_range(0..=HARD_A_MAX),
                rng.gen_range(1..=HARD_B_MAX),
                operator,
            )
        }
    };

    let mut question = Question {
        operand_a,
        operand_b,
        operator,
        answer: operator.apply(operand_a, operand_b),
        difficulty,
    };
    repair_division(&mut question, rng);
    question
}

/// Redraw both operands of a division until the quotient is whole, then
/// recompute the answer.  A = 0 always divides, so this terminates almost
/// surely within a handful of draws.
fn repair_division(question: &mut Question, rng: &mut impl Rng) {
    if question.operator != Operator::Div {
        return;
    }
    while question.operand_a % question.operand_b != 0 {
        question.operand_a = rng.gen_range(0..=HARD_A_MAX);
        question.operand_b = rng.gen_range(1..=HARD_B_MAX);
    }
    question.answer = question.operator.apply(question.operand_a, question.operand_b);
}

// ── Answer checking ──────────────────────────────────────────────────────────

/// `true` iff `submitted` parses as an integer equal to the answer.
/// Anything unparsable is simply wrong.
pub fn check_answer(question: &Question, submitted: &str) -> bool {
    submitted
        .trim()
        .parse::<i64>()
        .map(|value| value == i64::from(question.answer))
        .unwrap_or(false)
}

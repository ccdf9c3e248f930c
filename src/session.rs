/// Screen sequencing: menu → game → high scores → menu …
///
/// Each screen owns a `ScreenState` (run flag, player name, optional next
/// screen).  `run` opens a screen, ticks it while it is active, then opens
/// whatever it named next, carrying the player name along.  No next screen
/// ends the session.

use std::io;
use std::time::Instant;

use crate::audio::{Audio, Music};
use crate::config::GameConfig;
use crate::entities::Difficulty;
use crate::error::GameError;
use crate::game::GameScreen;
use crate::leaderboard::{Leaderboard, TOP_N};
use crate::menu::{HighScoresScreen, MenuScreen, RulesScreen};

// ── Input ─────────────────────────────────────────────────────────────────────

/// A discrete key press, already decoded from the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(u8),
    Minus,
    Backspace,
    Enter,
    Up,
    Down,
    Left,
    Right,
    /// A letter a–z, as typed.
    Letter(char),
    /// Leave the game entirely.
    Quit,
}

// ── Screens ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenName {
    Menu,
    EasyGame,
    HardGame,
    Rules,
    HighScores,
}

impl ScreenName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenName::Menu => "menu",
            ScreenName::EasyGame => "easy_game",
            ScreenName::HardGame => "hard_game",
            ScreenName::Rules => "rules",
            ScreenName::HighScores => "high_scores",
        }
    }

    pub fn is_game(&self) -> bool {
        matches!(self, ScreenName::EasyGame | ScreenName::HardGame)
    }
}

/// The fields every screen carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenState {
    pub active: bool,
    pub player_name: String,
    pub next_screen: Option<ScreenName>,
}

impl ScreenState {
    pub fn new(player_name: String) -> Self {
        ScreenState {
            active: true,
            player_name,
            next_screen: None,
        }
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn set_next_screen(&mut self, name: ScreenName) {
        self.next_screen = Some(name);
    }
}

pub enum Screen {
    Menu(MenuScreen),
    Game(GameScreen),
    Rules(RulesScreen),
    HighScores(HighScoresScreen),
}

impl Screen {
    /// Build the screen called `name` for `player_name`.  Opening the
    /// high-scores page loads the leaderboard, which can fail.
    pub fn open(
        name: ScreenName,
        player_name: String,
        config: &GameConfig,
        now: Instant,
    ) -> Result<Self, GameError> {
        let screen = match name {
            ScreenName::Menu => Screen::Menu(MenuScreen::new(player_name)),
            ScreenName::EasyGame => {
                Screen::Game(GameScreen::new(player_name, Difficulty::Easy, config, now))
            }
            ScreenName::HardGame => {
                Screen::Game(GameScreen::new(player_name, Difficulty::Hard, config, now))
            }
            ScreenName::Rules => Screen::Rules(RulesScreen::new(player_name)),
            ScreenName::HighScores => {
                let leaderboard = Leaderboard::open(&config.leaderboard_path)?;
                Screen::HighScores(HighScoresScreen::new(player_name, leaderboard.top(TOP_N)))
            }
        };
        Ok(screen)
    }

    pub fn state(&self) -> &ScreenState {
        match self {
            Screen::Menu(s) => &s.state,
            Screen::Game(s) => &s.state,
            Screen::Rules(s) => &s.state,
            Screen::HighScores(s) => &s.state,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state().active
    }

    /// One tick of whichever screen this is.
    pub fn frame(&mut self, keys: &[Key], now: Instant, audio: &mut dyn Audio) {
        match self {
            Screen::Menu(s) => s.frame(keys),
            Screen::Game(s) => {
                s.frame(keys, now, audio);
            }
            Screen::Rules(s) => s.frame(keys),
            Screen::HighScores(s) => s.frame(keys),
        }
    }

    /// Score to submit once the screen has closed (finished games only).
    pub fn final_score(&self) -> Option<i64> {
        match self {
            Screen::Game(s) => s.final_score(),
            _ => None,
        }
    }
}

// ── Orchestration ─────────────────────────────────────────────────────────────

/// What the session needs from the terminal (or a test double).
pub trait Frontend {
    /// Every key pressed since the previous call.  Never blocks.
    fn poll_keys(&mut self) -> Vec<Key>;
    fn render(&mut self, screen: &Screen) -> io::Result<()>;
    /// Called once per tick after rendering; paces the loop.
    fn end_frame(&mut self, frame_start: Instant);
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Drive screens from the menu until one closes without a successor.
pub fn run<F: Frontend>(
    config: &GameConfig,
    frontend: &mut F,
    audio: &mut dyn Audio,
) -> Result<(), GameError> {
    run_from(ScreenName::Menu, String::new(), config, frontend, audio)
}

pub fn run_from<F: Frontend>(
    first: ScreenName,
    player_name: String,
    config: &GameConfig,
    frontend: &mut F,
    audio: &mut dyn Audio,
) -> Result<(), GameError> {
    let mut next = Some(first);
    let mut player_name = player_name;

    while let Some(name) = next {
        tracing::info!(screen = name.as_str(), player = %player_name, "opening screen");
        if name == ScreenName::Menu {
            audio.play_music(Music::Calm);
        }

        let mut screen = Screen::open(name, player_name, config, frontend.now())?;
        while screen.is_active() {
            let frame_start = frontend.now();
            let keys = frontend.poll_keys();
            screen.frame(&keys, frame_start, audio);
            frontend.render(&screen)?;
            frontend.end_frame(frame_start);
        }

        let state = screen.state();
        player_name = state.player_name.clone();
        next = state.next_screen;

        if let Some(score) = screen.final_score() {
            let mut leaderboard = Leaderboard::open(&config.leaderboard_path)?;
            leaderboard.submit(&player_name, score)?;
        }
    }

    tracing::info!("session over");
    Ok(())
}

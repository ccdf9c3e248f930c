/// Non-game screens: the main menu, the rules page and the high-scores page.

use crate::session::{Key, ScreenName, ScreenState};

/// Longest name the menu accepts.
pub const MAX_NAME_LEN: usize = 10;

// ── Menu ──────────────────────────────────────────────────────────────────────

/// Menu buttons, top to bottom, and the screen each one opens.
pub const MENU_BUTTONS: [(&str, ScreenName); 4] = [
    ("PLAY [EASY]", ScreenName::EasyGame),
    ("PLAY [HARD]", ScreenName::HardGame),
    ("RULES", ScreenName::Rules),
    ("HIGH SCORES", ScreenName::HighScores),
];

#[derive(Clone, Debug)]
pub struct MenuScreen {
    pub state: ScreenState,
    active_button: usize,
    /// Set when a game was requested without a name.
    name_required: bool,
}

impl MenuScreen {
    pub fn new(player_name: String) -> Self {
        MenuScreen {
            state: ScreenState::new(player_name),
            active_button: 0,
            name_required: false,
        }
    }

    pub fn active_button(&self) -> usize {
        self.active_button
    }

    pub fn name_required(&self) -> bool {
        self.name_required
    }

    pub fn frame(&mut self, keys: &[Key]) {
        for &key in keys {
            self.handle_key(key);
            if !self.state.active {
                break;
            }
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Up => self.active_button = self.active_button.saturating_sub(1),
            Key::Down => {
                if self.active_button + 1 < MENU_BUTTONS.len() {
                    self.active_button += 1;
                }
            }
            Key::Backspace => {
                self.state.player_name.pop();
            }
            Key::Letter(c) => {
                if self.state.player_name.chars().count() < MAX_NAME_LEN && c.is_ascii_alphabetic() {
                    self.state.player_name.push(c.to_ascii_uppercase());
                    self.name_required = false;
                }
            }
            Key::Enter => self.select(),
            Key::Quit => self.state.stop(),
            _ => {}
        }
    }

    fn select(&mut self) {
        let target = MENU_BUTTONS[self.active_button].1;
        if target.is_game() && self.state.player_name.is_empty() {
            tracing::debug!(screen = target.as_str(), "game refused: no player name");
            self.name_required = true;
            return;
        }
        self.state.set_next_screen(target);
        self.state.stop();
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

pub const RULES: [&str; 11] = [
    "1) Your objective is to meditate in order to get wiser.",
    "2) You need to stop evil ninjas from disturbing the meditation.",
    "3) You can stop evil ninjas by throwing a shuriken.",
    "4) To throw a shuriken to your right press RIGHT ARROW.",
    "5) To throw a shuriken to your left press LEFT ARROW.",
    "6) You need to answer a math question to get a shuriken.",
    "7) To answer, type a number on your keyboard & press RETURN.",
    "8) You get one shuriken per correct answer.",
    "9) You cannot skip a question.",
    "10) If an evil ninja reaches you, the game is over.",
    "11) Your score is the ninja's final IQ.",
];

#[derive(Clone, Debug)]
pub struct RulesScreen {
    pub state: ScreenState,
}

impl RulesScreen {
    pub fn new(player_name: String) -> Self {
        RulesScreen {
            state: ScreenState::new(player_name),
        }
    }

    pub fn frame(&mut self, keys: &[Key]) {
        for &key in keys {
            back_or_quit(&mut self.state, key);
        }
    }
}

// ── High scores ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct HighScoresScreen {
    pub state: ScreenState,
    /// Top entries, best first.
    entries: Vec<(String, i64)>,
}

impl HighScoresScreen {
    pub fn new(player_name: String, entries: Vec<(String, i64)>) -> Self {
        HighScoresScreen {
            state: ScreenState::new(player_name),
            entries,
        }
    }

    pub fn entries(&self) -> &[(String, i64)] {
        &self.entries
    }

    pub fn frame(&mut self, keys: &[Key]) {
        for &key in keys {
            back_or_quit(&mut self.state, key);
        }
    }
}

/// `Q` goes back to the menu; the quit signal leaves the game.
fn back_or_quit(state: &mut ScreenState, key: Key) {
    if !state.active {
        return;
    }
    match key {
        Key::Letter('q') | Key::Letter('Q') => {
            state.set_next_screen(ScreenName::Menu);
            state.stop();
        }
        Key::Quit => state.stop(),
        _ => {}
    }
}

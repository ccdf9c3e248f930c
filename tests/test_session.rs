use std::collections::VecDeque;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use meditating_ninja::audio::{Audio, Music, Sound};
use meditating_ninja::config::GameConfig;
use meditating_ninja::error::{GameError, LeaderboardError};
use meditating_ninja::leaderboard::Leaderboard;
use meditating_ninja::session::*;

use tempfile::TempDir;

const FRAME: Duration = Duration::from_millis(33);
const MAX_FRAMES: usize = 10_000;

/// Plays back one batch of keys per frame on a simulated clock.  Once the
/// script runs out, a game already on screen plays on; anything else quits.
struct ScriptedFrontend {
    script: VecDeque<Vec<Key>>,
    now: Instant,
    frames: usize,
    visited: Vec<&'static str>,
}

impl ScriptedFrontend {
    fn new(script: Vec<Vec<Key>>) -> Self {
        ScriptedFrontend {
            script: script.into(),
            now: Instant::now(),
            frames: 0,
            visited: Vec::new(),
        }
    }

    fn last_screen(&self) -> Option<&'static str> {
        self.visited.last().copied()
    }
}

fn screen_kind(screen: &Screen) -> &'static str {
    match screen {
        Screen::Menu(_) => "menu",
        Screen::Game(_) => "game",
        Screen::Rules(_) => "rules",
        Screen::HighScores(_) => "high_scores",
    }
}

impl Frontend for ScriptedFrontend {
    fn poll_keys(&mut self) -> Vec<Key> {
        self.frames += 1;
        if self.frames > MAX_FRAMES {
            return vec![Key::Quit];
        }
        match self.script.pop_front() {
            Some(keys) => keys,
            None if self.last_screen() == Some("game") => Vec::new(),
            None => vec![Key::Quit],
        }
    }

    fn render(&mut self, screen: &Screen) -> io::Result<()> {
        let kind = screen_kind(screen);
        if self.last_screen() != Some(kind) {
            self.visited.push(kind);
        }
        Ok(())
    }

    fn end_frame(&mut self, _frame_start: Instant) {
        self.now += FRAME;
    }

    fn now(&self) -> Instant {
        self.now
    }
}

#[derive(Default)]
struct RecordingAudio {
    sounds: Vec<Sound>,
    music: Vec<Music>,
}

impl Audio for RecordingAudio {
    fn play_sound(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }
    fn play_music(&mut self, music: Music) {
        self.music.push(music);
    }
    fn stop_music(&mut self) {}
}

fn config_in(dir: &TempDir) -> GameConfig {
    GameConfig {
        leaderboard_path: dir.path().join("scores.txt"),
        easy_spawn_interval: FRAME,
        hard_spawn_interval: FRAME,
        game_over_pause: Duration::ZERO,
        ..GameConfig::default()
    }
}

fn letters(name: &str) -> Vec<Key> {
    name.chars().map(Key::Letter).collect()
}

// ── Menu gate ─────────────────────────────────────────────────────────────────

#[test]
fn game_needs_a_name() {
    let dir = TempDir::new().unwrap();
    let mut frontend = ScriptedFrontend::new(vec![vec![Key::Enter], vec![Key::Enter]]);
    let mut audio = RecordingAudio::default();

    run(&config_in(&dir), &mut frontend, &mut audio).unwrap();
    assert_eq!(frontend.visited, vec!["menu"]);
    assert_eq!(audio.music, vec![Music::Calm]);
}

#[test]
fn named_player_enters_easy_game() {
    let dir = TempDir::new().unwrap();
    let mut keys = letters("KAI");
    keys.push(Key::Enter);
    let mut frontend = ScriptedFrontend::new(vec![keys, vec![Key::Quit]]);
    let mut audio = RecordingAudio::default();

    run(&config_in(&dir), &mut frontend, &mut audio).unwrap();
    assert_eq!(frontend.visited, vec!["menu", "game"]);
    // Quitting mid-game records nothing.
    assert!(Leaderboard::open(dir.path().join("scores.txt")).unwrap().is_empty());
}

// ── Side screens ──────────────────────────────────────────────────────────────

#[test]
fn rules_and_back() {
    let dir = TempDir::new().unwrap();
    let mut frontend = ScriptedFrontend::new(vec![
        vec![Key::Down, Key::Down, Key::Enter],
        vec![Key::Letter('Q')],
    ]);
    let mut audio = RecordingAudio::default();

    run(&config_in(&dir), &mut frontend, &mut audio).unwrap();
    assert_eq!(frontend.visited, vec!["menu", "rules", "menu"]);
    assert_eq!(audio.music, vec![Music::Calm, Music::Calm]);
}

#[test]
fn malformed_leaderboard_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(&config.leaderboard_path, "BOB\nnot a number\n").unwrap();
    let mut frontend =
        ScriptedFrontend::new(vec![vec![Key::Down, Key::Down, Key::Down, Key::Enter]]);
    let mut audio = RecordingAudio::default();

    let result = run(&config, &mut frontend, &mut audio);
    assert!(matches!(
        result,
        Err(GameError::Leaderboard(LeaderboardError::Malformed { line: 2, .. }))
    ));
}

// ── Full game ─────────────────────────────────────────────────────────────────

#[test]
fn game_over_submits_score_and_shows_high_scores() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(&config.leaderboard_path, "OLD\n200\n").unwrap();
    let mut keys = letters("NEO");
    keys.push(Key::Enter);
    // The empty batch carries the script into the game, which then plays out.
    let mut frontend = ScriptedFrontend::new(vec![keys, vec![]]);
    let mut audio = RecordingAudio::default();

    run(&config, &mut frontend, &mut audio).unwrap();
    assert_eq!(frontend.visited, vec!["menu", "game", "high_scores"]);
    assert!(frontend.frames < MAX_FRAMES);
    assert_eq!(audio.sounds, vec![Sound::Gong]);

    let board = Leaderboard::open(&config.leaderboard_path).unwrap();
    assert_eq!(
        board.ranked(),
        vec![("OLD".to_string(), 200), ("NEO".to_string(), 75)]
    );
}

#[test]
fn name_carries_across_screens() {
    let dir = TempDir::new().unwrap();
    let mut first = letters("KAI");
    first.extend([Key::Down, Key::Down, Key::Enter]);
    let mut frontend = ScriptedFrontend::new(vec![
        first,
        vec![Key::Letter('Q')],
        // Back on the menu the name is still there, so a game may start.
        vec![Key::Up, Key::Up, Key::Enter],
        vec![Key::Quit],
    ]);
    let mut audio = RecordingAudio::default();

    run(&config_in(&dir), &mut frontend, &mut audio).unwrap();
    assert_eq!(frontend.visited, vec!["menu", "rules", "menu", "game"]);
}

#[test]
fn screen_names() {
    assert_eq!(ScreenName::EasyGame.as_str(), "easy_game");
    assert_eq!(ScreenName::HighScores.as_str(), "high_scores");
    assert!(ScreenName::HardGame.is_game());
    assert!(!ScreenName::Rules.is_game());

    let mut state = ScreenState::new("KAI".to_string());
    assert!(state.active);
    state.set_next_screen(ScreenName::Menu);
    state.stop();
    assert!(!state.active);
    assert_eq!(state.next_screen, Some(ScreenName::Menu));
}

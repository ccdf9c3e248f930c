/// The game screen: one tick drains the queued events, applies panel and
/// fire mutations, advances every entity, then runs the collision scan.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::{Audio, Sound};
use crate::collision::{scan, ScanReport};
use crate::config::GameConfig;
use crate::entities::{Difficulty, Direction, Player};
use crate::panel::{Panel, PanelKey};
use crate::session::{Key, ScreenName, ScreenState};
use crate::trackers::{EnemyTracker, ProjectileTracker, SpawnTimer};

/// Events handled by the game screen during one tick, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Key(Key),
    SpawnEnemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// An enemy reached the ninja; everything is frozen until `until`.
    GameOverPause { until: Instant },
    Finished,
}

/// Throw a projectile if the panel has one to spend.  Returns whether a
/// projectile was thrown.
pub fn fire(
    direction: Direction,
    panel: &mut Panel,
    projectiles: &mut ProjectileTracker,
    audio: &mut dyn Audio,
) -> bool {
    if panel.inventory() == 0 {
        return false;
    }
    let id = projectiles.spawn(direction);
    panel.spend_projectile();
    audio.play_sound(Sound::Throw);
    tracing::debug!(?id, ?direction, inventory = panel.inventory(), "projectile thrown");
    true
}

pub struct GameScreen {
    pub state: ScreenState,
    difficulty: Difficulty,
    player: Player,
    panel: Panel,
    projectiles: ProjectileTracker,
    enemies: EnemyTracker,
    spawn_timer: SpawnTimer,
    phase: GamePhase,
    final_score: Option<i64>,
    pause: Duration,
    rng: StdRng,
}

impl GameScreen {
    pub fn new(player_name: String, difficulty: Difficulty, config: &GameConfig, now: Instant) -> Self {
        Self::with_rng(player_name, difficulty, config, now, StdRng::from_entropy())
    }

    /// Same as `new` with a caller-supplied RNG (seeded in tests).
    pub fn with_rng(
        player_name: String,
        difficulty: Difficulty,
        config: &GameConfig,
        now: Instant,
        mut rng: StdRng,
    ) -> Self {
        let panel = Panel::new(difficulty, &mut rng);
        GameScreen {
            state: ScreenState::new(player_name),
            difficulty,
            player: Player::new(),
            panel,
            projectiles: ProjectileTracker::new(),
            enemies: EnemyTracker::new(),
            spawn_timer: SpawnTimer::new(config.spawn_interval(difficulty), now),
            phase: GamePhase::Playing,
            final_score: None,
            pause: config.game_over_pause,
            rng,
        }
    }

    // ── Read access for the renderer ─────────────────────────────────────────

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn projectiles(&self) -> &ProjectileTracker {
        &self.projectiles
    }

    pub fn enemies(&self) -> &EnemyTracker {
        &self.enemies
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Set once the game is over; the session submits it to the leaderboard.
    pub fn final_score(&self) -> Option<i64> {
        self.final_score
    }

    // ── Per-tick pipeline ────────────────────────────────────────────────────

    /// Run one tick.  Returns the collision report when the simulation moved.
    pub fn frame(&mut self, keys: &[Key], now: Instant, audio: &mut dyn Audio) -> Option<ScanReport> {
        match self.phase {
            GamePhase::Playing => {}
            GamePhase::GameOverPause { until } => {
                // Frozen: only a quit gets through.
                if keys.contains(&Key::Quit) {
                    self.finish(None);
                } else if now >= until {
                    self.finish(Some(ScreenName::HighScores));
                }
                return None;
            }
            GamePhase::Finished => return None,
        }

        let mut events: Vec<GameEvent> = keys.iter().copied().map(GameEvent::Key).collect();
        events.extend((0..self.spawn_timer.poll(now)).map(|_| GameEvent::SpawnEnemy));

        for event in events {
            self.handle_event(event, audio);
            if !self.state.active {
                return None;
            }
        }

        self.enemies.advance(1);
        self.projectiles.advance(1);

        let report = scan(
            &self.player,
            &mut self.projectiles,
            &mut self.enemies,
            &mut self.panel,
        );
        if report.game_over {
            self.begin_game_over(now, audio);
        }
        Some(report)
    }

    pub fn handle_event(&mut self, event: GameEvent, audio: &mut dyn Audio) {
        match event {
            GameEvent::SpawnEnemy => {
                let id = self.enemies.spawn_random(&mut self.rng);
                tracing::trace!(?id, live = self.enemies.len(), "enemy spawned");
            }
            GameEvent::Key(Key::Quit) => {
                tracing::info!("quit during game");
                self.state.stop();
            }
            GameEvent::Key(Key::Left) => {
                fire(Direction::Left, &mut self.panel, &mut self.projectiles, audio);
            }
            GameEvent::Key(Key::Right) => {
                fire(Direction::Right, &mut self.panel, &mut self.projectiles, audio);
            }
            GameEvent::Key(key) => {
                if let Some(panel_key) = panel_key(key) {
                    self.panel.handle_key(panel_key, &mut self.rng);
                }
            }
        }
    }

    /// Spawn an enemy on a chosen side, bypassing the timer.
    pub fn spawn_enemy(&mut self, origin: Direction) {
        self.enemies.spawn(origin);
    }

    fn begin_game_over(&mut self, now: Instant, audio: &mut dyn Audio) {
        if self.phase != GamePhase::Playing {
            return;
        }
        tracing::info!(
            name = %self.state.player_name,
            difficulty = self.difficulty.as_str(),
            score = self.panel.score(),
            "game over"
        );
        audio.stop_music();
        audio.play_sound(Sound::Gong);
        self.phase = GamePhase::GameOverPause {
            until: now + self.pause,
        };
    }

    fn finish(&mut self, next: Option<ScreenName>) {
        self.enemies.clear();
        self.final_score = Some(self.panel.score());
        self.phase = GamePhase::Finished;
        if let Some(next) = next {
            self.state.set_next_screen(next);
        }
        self.state.stop();
    }
}

fn panel_key(key: Key) -> Option<PanelKey> {
    match key {
        Key::Digit(d) => Some(PanelKey::Digit(d)),
        Key::Minus => Some(PanelKey::Minus),
        Key::Backspace => Some(PanelKey::Backspace),
        Key::Enter => Some(PanelKey::Submit),
        _ => None,
    }
}

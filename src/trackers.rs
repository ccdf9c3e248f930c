/// Owners of the in-flight projectile and enemy collections.
///
/// Each tracker is the only thing that mutates its collection; the collision
/// engine goes through `remove`.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::entities::{
    Direction, Enemy, EntityId, Projectile, ENEMY_EXTENT, ENEMY_LEFT_START, ENEMY_RIGHT_START,
};

/// Enemies never exist outside this span of x (they only walk inward from
/// their entry points), so a projectile whose midpoint leaves it can no
/// longer hit anything.
const LIVE_SPAN: (i32, i32) = (ENEMY_LEFT_START.0, ENEMY_RIGHT_START.0 + ENEMY_EXTENT.0);

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct ProjectileTracker {
    projectiles: Vec<Projectile>,
    next_id: u64,
}

impl ProjectileTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, direction: Direction) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.projectiles.push(Projectile::new(id, direction));
        id
    }

    /// Move every projectile by `ticks` steps, then drop the ones that have
    /// flown out of reach.  Returns how many were dropped.
    pub fn advance(&mut self, ticks: i32) -> usize {
        for projectile in &mut self.projectiles {
            projectile.body.step(ticks);
        }
        let before = self.projectiles.len();
        self.projectiles.retain(|p| {
            let mid = p.body.mid_x();
            mid >= LIVE_SPAN.0 && mid <= LIVE_SPAN.1
        });
        before - self.projectiles.len()
    }

    /// Live projectiles in spawn order.
    pub fn entities(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Projectile> {
        let index = self.projectiles.iter().position(|p| p.id == id)?;
        Some(self.projectiles.remove(index))
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct EnemyTracker {
    enemies: Vec<Enemy>,
    next_id: u64,
}

impl EnemyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, origin: Direction) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.enemies.push(Enemy::new(id, origin));
        id
    }

    /// Spawn one enemy on a side picked uniformly at random.
    pub fn spawn_random(&mut self, rng: &mut impl Rng) -> EntityId {
        let origin = if rng.gen_bool(0.5) {
            Direction::Left
        } else {
            Direction::Right
        };
        self.spawn(origin)
    }

    pub fn advance(&mut self, ticks: i32) {
        for enemy in &mut self.enemies {
            enemy.body.step(ticks);
        }
    }

    /// Live enemies in spawn order.
    pub fn entities(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(index))
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

// ── Spawn timer ───────────────────────────────────────────────────────────────

/// Periodic trigger for enemy spawns, polled once per tick.
///
/// Fires every `interval` of wall-clock time.  If a frame overran several
/// intervals, each missed firing is reported so no spawn is lost.
#[derive(Clone, Debug)]
pub struct SpawnTimer {
    interval: Duration,
    next_due: Instant,
}

impl SpawnTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        SpawnTimer {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of firings due at `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        let mut fired = 0;
        while now >= self.next_due {
            fired += 1;
            self.next_due += self.interval;
        }
        fired
    }
}

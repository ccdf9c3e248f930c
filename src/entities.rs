/// All game entity types — pure data, no logic.
///
/// Positions and extents are in play-field pixels.  The field is
/// `FIELD_WIDTH` × `FIELD_HEIGHT`; every entity shares the same horizontal
/// lane, so only `x` matters for movement and collisions.

// ── Play field ────────────────────────────────────────────────────────────────

pub const FIELD_WIDTH: i32 = 600;
pub const FIELD_HEIGHT: i32 = 400;

// ── Per-kind geometry ─────────────────────────────────────────────────────────

pub const PLAYER_POSITION: (i32, i32) = (245, 281);
pub const PLAYER_EXTENT: (i32, i32) = (110, 119);

pub const PROJECTILE_EXTENT: (i32, i32) = (30, 30);
pub const PROJECTILE_SPEED: i32 = 8;
/// Launch point of a projectile thrown to the right.
pub const PROJECTILE_RIGHT_START: (i32, i32) = (335, 321);
/// Launch point of a projectile thrown to the left.
pub const PROJECTILE_LEFT_START: (i32, i32) = (235, 321);

pub const ENEMY_EXTENT: (i32, i32) = (82, 99);
pub const ENEMY_SPEED: i32 = 3;
/// Entry point of an enemy coming from the right edge.
pub const ENEMY_RIGHT_START: (i32, i32) = (650, 301);
/// Entry point of an enemy coming from the left edge.
pub const ENEMY_LEFT_START: (i32, i32) = (-132, 301);

// ── Enumerations ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

/// A side of the play field.  Used both as a projectile's travel direction
/// and as the side an enemy enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

/// Identity of a live projectile or enemy, unique within its tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

// ── Shared body ───────────────────────────────────────────────────────────────

/// Position, extent and horizontal velocity shared by every entity.
///
/// `extent` is fixed by the entity kind and `velocity` keeps its sign for the
/// entity's whole life; only `x` changes after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovingEntity {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Signed pixels per tick along x (positive = rightward).
    pub velocity: i32,
}

impl MovingEntity {
    pub fn new(position: (i32, i32), extent: (i32, i32), velocity: i32) -> Self {
        MovingEntity {
            x: position.0,
            y: position.1,
            width: extent.0,
            height: extent.1,
            velocity,
        }
    }

    /// Horizontal midpoint (integer division, as pixels are whole).
    pub fn mid_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn step(&mut self, ticks: i32) {
        self.x += self.velocity * ticks;
    }
}

/// Anything with a body that can take part in a collision test.
pub trait Body {
    fn body(&self) -> &MovingEntity;
}

// ── Player, projectiles, enemies ──────────────────────────────────────────────

/// The stationary meditating ninja.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: MovingEntity,
}

impl Player {
    pub fn new() -> Self {
        Player {
            body: MovingEntity::new(PLAYER_POSITION, PLAYER_EXTENT, 0),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub id: EntityId,
    pub body: MovingEntity,
    pub direction: Direction,
}

impl Projectile {
    pub fn new(id: EntityId, direction: Direction) -> Self {
        let (start, velocity) = match direction {
            Direction::Right => (PROJECTILE_RIGHT_START, PROJECTILE_SPEED),
            Direction::Left => (PROJECTILE_LEFT_START, -PROJECTILE_SPEED),
        };
        Projectile {
            id,
            body: MovingEntity::new(start, PROJECTILE_EXTENT, velocity),
            direction,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: EntityId,
    pub body: MovingEntity,
    /// The side the enemy walked in from.
    pub origin: Direction,
}

impl Enemy {
    pub fn new(id: EntityId, origin: Direction) -> Self {
        // Enemies always walk toward the centre.
        let (start, velocity) = match origin {
            Direction::Right => (ENEMY_RIGHT_START, -ENEMY_SPEED),
            Direction::Left => (ENEMY_LEFT_START, ENEMY_SPEED),
        };
        Enemy {
            id,
            body: MovingEntity::new(start, ENEMY_EXTENT, velocity),
            origin,
        }
    }
}

impl Body for Player {
    fn body(&self) -> &MovingEntity {
        &self.body
    }
}

impl Body for Projectile {
    fn body(&self) -> &MovingEntity {
        &self.body
    }
}

impl Body for Enemy {
    fn body(&self) -> &MovingEntity {
        &self.body
    }
}

impl Body for MovingEntity {
    fn body(&self) -> &MovingEntity {
        self
    }
}

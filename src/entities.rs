/// All game entity types — pure data, plus the per-variant parameter tables
/// that are resolved once at spawn time.
///
/// Positions live in virtual field units (the field is nominally 800×600);
/// the renderer scales them to terminal cells.  `y` grows downward.

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Two rectangles intersect iff both projections overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// The visible play area.  `compact` reproduces the small-screen profile:
/// enemies shrink and slow by [`COMPACT_SCALE`] and the live-entity caps drop.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub compact: bool,
}

impl Field {
    pub fn new(width: f32, height: f32, compact: bool) -> Self {
        Field { width, height, compact }
    }

    /// Uniform shrink applied to enemy size and speed on compact fields.
    pub fn enemy_scale(&self) -> f32 {
        if self.compact { COMPACT_SCALE } else { 1.0 }
    }

    pub fn max_enemies(&self) -> usize {
        if self.compact { 5 } else { 10 }
    }

    pub fn max_particles(&self) -> usize {
        if self.compact { 30 } else { 60 }
    }
}

pub const COMPACT_SCALE: f32 = 0.8;

// ── Ship ─────────────────────────────────────────────────────────────────────

pub const SHIP_WIDTH: f32 = 60.0;
pub const SHIP_HEIGHT: f32 = 40.0;
pub const SHIP_SPEED: f32 = 5.0;
pub const MAX_HEALTH: i32 = 100;

/// The player ship.  Power-up state is a set of millisecond deadlines on the
/// game clock: an effect is active iff `now < deadline`, so expiry needs no
/// scheduled callback and a restart leaves nothing to cancel.
#[derive(Clone, Debug)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Clamped to `0..=MAX_HEALTH`; 0 is terminal for the run.
    pub health: i32,
    pub shield_until: u64,
    pub rapid_until: u64,
    pub multi_until: u64,
}

impl Ship {
    pub fn spawn(field: &Field) -> Self {
        Ship {
            x: field.width / 2.0 - SHIP_WIDTH / 2.0,
            y: field.height - 100.0,
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            speed: SHIP_SPEED,
            health: MAX_HEALTH,
            shield_until: 0,
            rapid_until: 0,
            multi_until: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.width, h: self.height }
    }

    pub fn shield_active(&self, now_ms: u64) -> bool {
        now_ms < self.shield_until
    }

    pub fn rapid_active(&self, now_ms: u64) -> bool {
        now_ms < self.rapid_until
    }

    pub fn multi_active(&self, now_ms: u64) -> bool {
        now_ms < self.multi_until
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Standard,
    Fast,
    Tank,
}

impl EnemyKind {
    /// Square body, side length in field units.
    pub fn size(&self) -> f32 {
        match self {
            EnemyKind::Standard => 40.0,
            EnemyKind::Fast => 30.0,
            EnemyKind::Tank => 50.0,
        }
    }

    /// Downward speed per reference frame, scaled linearly by level.
    pub fn speed(&self, level: u32) -> f32 {
        let l = level as f32;
        match self {
            EnemyKind::Standard => 1.5 + l * 0.15,
            EnemyKind::Fast => 2.0 + l * 0.2,
            EnemyKind::Tank => 0.8 + l * 0.08,
        }
    }

    pub fn hit_points(&self) -> i32 {
        match self {
            EnemyKind::Standard => 1,
            EnemyKind::Fast => 1,
            EnemyKind::Tank => 3,
        }
    }

    /// Score awarded when the enemy is destroyed by a bullet.
    pub fn score(&self) -> u32 {
        match self {
            EnemyKind::Standard => 10,
            EnemyKind::Fast => 20,
            EnemyKind::Tank => 30,
        }
    }

    /// Health lost when the enemy rams the ship.
    pub fn contact_damage(&self) -> i32 {
        match self {
            EnemyKind::Standard => 10,
            EnemyKind::Fast => 15,
            EnemyKind::Tank => 25,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            EnemyKind::Standard => (239, 68, 68),
            EnemyKind::Fast => (34, 197, 94),
            EnemyKind::Tank => (249, 115, 22),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub hit_points: i32,
    pub kind: EnemyKind,
}

impl Enemy {
    /// Resolve the variant's static parameters once, just above the top edge.
    pub fn spawn(kind: EnemyKind, x: f32, level: u32, field: &Field) -> Self {
        let scale = field.enemy_scale();
        let size = kind.size() * scale;
        Enemy {
            x,
            y: -size,
            width: size,
            height: size,
            speed: kind.speed(level) * scale,
            hit_points: kind.hit_points(),
            kind,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.width, h: self.height }
    }
}

// ── Bullets ──────────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: f32 = 5.0;
pub const BULLET_HEIGHT: f32 = 15.0;
pub const BULLET_SPEED: f32 = 10.0;

/// Upward projectile.  Owner-less: destroyed on its first enemy hit or on
/// leaving the field.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Bullet {
    pub fn spawn(x: f32, y: f32) -> Self {
        Bullet {
            x,
            y,
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            speed: BULLET_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.width, h: self.height }
    }
}

// ── Power-ups ────────────────────────────────────────────────────────────────

pub const POWERUP_SIZE: f32 = 30.0;
pub const POWERUP_SPEED: f32 = 1.5;
/// How long a collected effect stays active (ms).
pub const POWERUP_DURATION_MS: u64 = 8_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerupKind {
    Shield,
    RapidFire,
    MultiShot,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] =
        [PowerupKind::Shield, PowerupKind::RapidFire, PowerupKind::MultiShot];

    pub fn color(&self) -> Rgb {
        match self {
            PowerupKind::Shield => (59, 130, 246),
            PowerupKind::RapidFire => (147, 51, 234),
            PowerupKind::MultiShot => (6, 182, 212),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Powerup {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub kind: PowerupKind,
}

impl Powerup {
    pub fn spawn(kind: PowerupKind, x: f32) -> Self {
        Powerup {
            x,
            y: -POWERUP_SIZE,
            width: POWERUP_SIZE,
            height: POWERUP_SIZE,
            speed: POWERUP_SPEED,
            kind,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.width, h: self.height }
    }
}

// ── Particles ────────────────────────────────────────────────────────────────

pub type Rgb = (u8, u8, u8);

/// Cosmetic debris from hits, explosions and pickups.  Lifetime is counted in
/// reference frames; render alpha = `life / max_life`.
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Rgb,
    pub vx: f32,
    pub vy: f32,
    pub life: f32,
    pub max_life: f32,
}

impl Particle {
    pub fn alpha(&self) -> f32 {
        if self.max_life > 0.0 {
            (self.life / self.max_life).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

// ── Events ───────────────────────────────────────────────────────────────────

/// Fire-and-forget notifications for audio/visual collaborators.  Hit and
/// explosion events carry the impact point for particle bursts; none of them
/// feed back into core state.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Shoot,
    Hit { x: f32, y: f32, color: Rgb },
    Explosion { x: f32, y: f32, color: Rgb },
    PowerupCollected { x: f32, y: f32, kind: PowerupKind },
    Start,
    GameOver,
    LevelUp,
}

/// Game clock and state transitions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, a clock reading and an RNG handle) and
/// returns a brand-new state plus the events the transition produced.
/// Side effects are limited to the injected RNG, so a seeded run is fully
/// reproducible in tests.

use rand::Rng;

use crate::collision::detect_and_resolve;
use crate::entities::{
    Bullet, Enemy, Field, GameEvent, Particle, Powerup, Rgb, Ship, BULLET_WIDTH,
};
use crate::integrator::{
    advance_bullets, advance_enemies, advance_particles, advance_powerups,
};
use crate::spawner::{try_spawn_enemy, try_spawn_powerup};

// ── Tuning ───────────────────────────────────────────────────────────────────

pub const SHOOT_COOLDOWN_MS: u64 = 300;
pub const RAPID_FIRE_COOLDOWN_MS: u64 = 150;
/// Score per level step; `level = score / LEVEL_STEP + 1`.
pub const LEVEL_STEP: u32 = 1_000;
/// Horizontal offset of the two outer multi-shot bullets.
pub const MULTI_SHOT_OFFSET: f32 = 10.0;

const WHITE: Rgb = (255, 255, 255);
const SPARK: Rgb = (56, 189, 248);

// ── State ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Running,
    Paused,
    Over,
}

/// The entire game state.  Entity collections are owned here for the
/// duration of one run and fully reset on start; only `best_score` and the
/// field survive across runs.
#[derive(Clone, Debug)]
pub struct GameState {
    pub phase: GamePhase,
    pub field: Field,
    pub ship: Ship,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub powerups: Vec<Powerup>,
    pub particles: Vec<Particle>,
    pub score: u32,
    pub level: u32,
    pub best_score: u32,
    pub last_enemy_spawn_ms: u64,
    pub last_powerup_spawn_ms: u64,
    pub last_shot_ms: Option<u64>,
}

/// Build the idle pre-game state for a field.
pub fn init_state(field: Field, best_score: u32) -> GameState {
    GameState {
        phase: GamePhase::Idle,
        field,
        ship: Ship::spawn(&field),
        enemies: Vec::new(),
        bullets: Vec::new(),
        powerups: Vec::new(),
        particles: Vec::new(),
        score: 0,
        level: 1,
        best_score,
        last_enemy_spawn_ms: 0,
        last_powerup_spawn_ms: 0,
        last_shot_ms: None,
    }
}

fn level_for(score: u32) -> u32 {
    score / LEVEL_STEP + 1
}

// ── Run control ──────────────────────────────────────────────────────────────

/// Start (or restart) a run: clears every collection, resets ship, score and
/// level, and re-arms the spawn gates at `now_ms`.  Valid from any phase.
pub fn start(state: &GameState, now_ms: u64) -> (GameState, Vec<GameEvent>) {
    let next = GameState {
        phase: GamePhase::Running,
        ship: Ship::spawn(&state.field),
        enemies: Vec::new(),
        bullets: Vec::new(),
        powerups: Vec::new(),
        particles: Vec::new(),
        score: 0,
        level: 1,
        last_enemy_spawn_ms: now_ms,
        last_powerup_spawn_ms: now_ms,
        last_shot_ms: None,
        ..state.clone()
    };
    (next, vec![GameEvent::Start])
}

/// Running ⇄ Paused; every other phase is a no-op.
pub fn toggle_pause(state: &GameState) -> GameState {
    let phase = match state.phase {
        GamePhase::Running => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Running,
        other => other,
    };
    GameState { phase, ..state.clone() }
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Pointer tracking: put the ship's left edge so its center follows `x`,
/// clamped to the field.
pub fn set_ship_x(state: &GameState, x: f32) -> GameState {
    if state.phase != GamePhase::Running {
        return state.clone();
    }
    let clamped = (x - state.ship.width / 2.0)
        .clamp(0.0, state.field.width - state.ship.width);
    GameState {
        ship: Ship { x: clamped, ..state.ship.clone() },
        ..state.clone()
    }
}

/// One keyboard step; four reference frames' worth of ship speed so held
/// keys feel like the pointer.
pub fn move_ship_left(state: &GameState) -> GameState {
    step_ship(state, -state.ship.speed * 4.0)
}

pub fn move_ship_right(state: &GameState) -> GameState {
    step_ship(state, state.ship.speed * 4.0)
}

fn step_ship(state: &GameState, dx: f32) -> GameState {
    if state.phase != GamePhase::Running {
        return state.clone();
    }
    let x = (state.ship.x + dx).clamp(0.0, state.field.width - state.ship.width);
    GameState {
        ship: Ship { x, ..state.ship.clone() },
        ..state.clone()
    }
}

/// Fire from the ship's nose, rate-limited against the clock rather than the
/// frame cadence.  Multi-shot produces exactly three bullets at fixed
/// horizontal offsets; rapid fire halves the cooldown.
pub fn fire(state: &GameState, now_ms: u64) -> (GameState, Vec<GameEvent>) {
    if state.phase != GamePhase::Running {
        return (state.clone(), Vec::new());
    }

    let cooldown = if state.ship.rapid_active(now_ms) {
        RAPID_FIRE_COOLDOWN_MS
    } else {
        SHOOT_COOLDOWN_MS
    };
    if let Some(last) = state.last_shot_ms {
        if now_ms.saturating_sub(last) < cooldown {
            return (state.clone(), Vec::new());
        }
    }

    let nose_x = state.ship.x + state.ship.width / 2.0 - BULLET_WIDTH / 2.0;
    let offsets: &[f32] = if state.ship.multi_active(now_ms) {
        &[-MULTI_SHOT_OFFSET, 0.0, MULTI_SHOT_OFFSET]
    } else {
        &[0.0]
    };

    let mut bullets = state.bullets.clone();
    for offset in offsets {
        bullets.push(Bullet::spawn(nose_x + offset, state.ship.y));
    }

    let next = GameState {
        bullets,
        last_shot_ms: Some(now_ms),
        ..state.clone()
    };
    (next, vec![GameEvent::Shoot])
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  Order matters: entities are moved
/// before collision resolution, so a collision is detected on this tick's
/// positions; spawning precedes integration so a fresh entity moves on the
/// tick it appears.  Non-running phases are a pure no-op.
pub fn tick(
    state: &GameState,
    now_ms: u64,
    elapsed_ms: f32,
    rng: &mut impl Rng,
) -> (GameState, Vec<GameEvent>) {
    if state.phase != GamePhase::Running {
        return (state.clone(), Vec::new());
    }

    // 1. Bullets move first.
    let bullets = advance_bullets(&state.bullets, elapsed_ms);

    // 2. Spawn, then move enemies.
    let mut enemies = state.enemies.clone();
    let mut last_enemy_spawn_ms = state.last_enemy_spawn_ms;
    if let Some(enemy) = try_spawn_enemy(
        now_ms,
        last_enemy_spawn_ms,
        state.level,
        enemies.len(),
        &state.field,
        rng,
    ) {
        enemies.push(enemy);
        last_enemy_spawn_ms = now_ms;
    }
    let enemies = advance_enemies(&enemies, &state.field, elapsed_ms);

    // 3. Spawn, then move power-ups.
    let mut powerups = state.powerups.clone();
    let mut last_powerup_spawn_ms = state.last_powerup_spawn_ms;
    if let Some(powerup) =
        try_spawn_powerup(now_ms, last_powerup_spawn_ms, &state.field, rng)
    {
        powerups.push(powerup);
        last_powerup_spawn_ms = now_ms;
    }
    let powerups = advance_powerups(&powerups, &state.field, elapsed_ms);

    // 4. Resolve collisions on the moved positions.
    let resolution =
        detect_and_resolve(&state.ship, &bullets, &enemies, &powerups, now_ms);

    // 5. Particles: age the old, burst for this tick's impacts.
    let mut particles = advance_particles(&state.particles, elapsed_ms);
    for event in &resolution.events {
        match *event {
            GameEvent::Hit { x, y, color } => {
                burst(&mut particles, x, y, 5, &[color, WHITE, SPARK], &state.field, rng);
            }
            GameEvent::Explosion { x, y, color } => {
                burst(&mut particles, x, y, 10, &[color, WHITE, (239, 68, 68)], &state.field, rng);
            }
            GameEvent::PowerupCollected { x, y, kind } => {
                burst(&mut particles, x, y, 8, &[kind.color(), WHITE, SPARK], &state.field, rng);
            }
            _ => {}
        }
    }

    // 6. Score and derived level.
    let score = state.score + resolution.score_delta;
    let level = level_for(score);

    let mut events = resolution.events;
    if level > state.level {
        events.push(GameEvent::LevelUp);
    }

    // 7. Health 0 is terminal: halt the run.
    let phase = if resolution.ship.health <= 0 {
        events.push(GameEvent::GameOver);
        GamePhase::Over
    } else {
        GamePhase::Running
    };

    let next = GameState {
        phase,
        ship: resolution.ship,
        enemies: resolution.enemies,
        bullets: resolution.bullets,
        powerups: resolution.powerups,
        particles,
        score,
        level,
        last_enemy_spawn_ms,
        last_powerup_spawn_ms,
        ..state.clone()
    };
    (next, events)
}

/// Scatter debris around an impact point.  Newest particles win when the cap
/// is exceeded.
fn burst(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    count: usize,
    colors: &[Rgb],
    field: &Field,
    rng: &mut impl Rng,
) {
    let count = if field.compact { count.min(5) } else { count };
    let mut fresh = Vec::with_capacity(count);

    for _ in 0..count {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(0.0..2.0) + 0.5;
        let life = rng.gen_range(0.0..20.0) + 10.0;
        fresh.push(Particle {
            x,
            y,
            size: rng.gen_range(0.0..3.0) + 1.0,
            color: colors[rng.gen_range(0..colors.len())],
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            life,
            max_life: life,
        });
    }

    fresh.append(particles);
    fresh.truncate(field.max_particles());
    *particles = fresh;
}

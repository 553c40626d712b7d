/// Time-gated random generation of enemies and power-ups.
///
/// Both entry points are pure apart from the injected RNG: callers pass the
/// current clock and the timestamp of the last successful spawn, and get back
/// `Some(entity)` only when the gate is open.  A `None` is a plain no-op —
/// the caller keeps its last-spawn timestamp unchanged.

use rand::Rng;

use crate::entities::{Enemy, EnemyKind, Field, Powerup, PowerupKind, POWERUP_SIZE};

/// Base interval between enemy spawns (ms); divided by `0.4 × level`, so the
/// gate shortens as the run progresses.
pub const ENEMY_SPAWN_BASE_MS: f32 = 1_500.0;

/// Fixed, level-independent interval between power-up spawns (ms).
pub const POWERUP_SPAWN_MS: u64 = 15_000;

/// Milliseconds between enemy spawns at the given level.
pub fn enemy_spawn_interval_ms(level: u32) -> f32 {
    ENEMY_SPAWN_BASE_MS / (level.max(1) as f32 * 0.4)
}

/// Cumulative weights over {Standard, Fast, Tank}.  The mix shifts in
/// discrete steps as the level crosses fixed thresholds: more tanks late.
fn kind_weights(level: u32) -> [f32; 3] {
    if level > 6 {
        [0.4, 0.3, 0.3]
    } else if level > 3 {
        [0.5, 0.3, 0.2]
    } else {
        [0.6, 0.3, 0.1]
    }
}

/// Weighted draw: first kind whose cumulative weight exceeds a uniform sample.
fn pick_kind(level: u32, rng: &mut impl Rng) -> EnemyKind {
    let weights = kind_weights(level);
    let kinds = [EnemyKind::Standard, EnemyKind::Fast, EnemyKind::Tank];
    let draw: f32 = rng.gen_range(0.0..1.0);

    let mut cumulative = 0.0;
    for (kind, weight) in kinds.iter().zip(weights) {
        cumulative += weight;
        if draw < cumulative {
            return *kind;
        }
    }
    EnemyKind::Standard
}

/// Spawn one enemy just above the top edge, or `None` while the interval
/// gate is closed or the live-enemy cap is reached.
pub fn try_spawn_enemy(
    now_ms: u64,
    last_spawn_ms: u64,
    level: u32,
    live_enemies: usize,
    field: &Field,
    rng: &mut impl Rng,
) -> Option<Enemy> {
    if (now_ms.saturating_sub(last_spawn_ms) as f32) <= enemy_spawn_interval_ms(level) {
        return None;
    }
    if live_enemies >= field.max_enemies() {
        return None;
    }

    let kind = pick_kind(level, rng);
    let width = kind.size() * field.enemy_scale();
    let x = rng.gen_range(0.0..(field.width - width).max(f32::MIN_POSITIVE));
    Some(Enemy::spawn(kind, x, level, field))
}

/// Spawn one power-up just above the top edge, or `None` while gated.
/// Variant is uniform among the three; size and speed are fixed.
pub fn try_spawn_powerup(
    now_ms: u64,
    last_spawn_ms: u64,
    field: &Field,
    rng: &mut impl Rng,
) -> Option<Powerup> {
    if now_ms.saturating_sub(last_spawn_ms) <= POWERUP_SPAWN_MS {
        return None;
    }

    let kind = PowerupKind::ALL[rng.gen_range(0..PowerupKind::ALL.len())];
    let x = rng.gen_range(0.0..(field.width - POWERUP_SIZE).max(f32::MIN_POSITIVE));
    Some(Powerup::spawn(kind, x))
}

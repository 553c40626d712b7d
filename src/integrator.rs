/// Movement integration — advances positions by velocity scaled by elapsed
/// time and discards entities that leave the field.
///
/// Every function is pure with respect to its input slice: it returns the
/// surviving entities as a new `Vec` and performs no collision or scoring.
/// Speeds are expressed per 16 ms reference frame, so `dt = elapsed / 16`
/// keeps entity velocity independent of the actual frame rate.

use crate::entities::{Bullet, Enemy, Field, Particle, Powerup};

/// The reference frame period speeds are calibrated against (ms).
pub const FRAME_REF_MS: f32 = 16.0;

fn time_scale(elapsed_ms: f32) -> f32 {
    elapsed_ms / FRAME_REF_MS
}

/// Bullets travel upward; removed once fully above the top edge.
pub fn advance_bullets(bullets: &[Bullet], elapsed_ms: f32) -> Vec<Bullet> {
    let dt = time_scale(elapsed_ms);
    bullets
        .iter()
        .filter_map(|b| {
            let y = b.y - b.speed * dt;
            if y + b.height < 0.0 {
                None
            } else {
                Some(Bullet { y, ..b.clone() })
            }
        })
        .collect()
}

/// Enemies descend; removed once fully below the bottom edge.  Leaked
/// enemies award no score — that is the collision detector's job.
pub fn advance_enemies(enemies: &[Enemy], field: &Field, elapsed_ms: f32) -> Vec<Enemy> {
    let dt = time_scale(elapsed_ms);
    enemies
        .iter()
        .filter_map(|e| {
            let y = e.y + e.speed * dt;
            if y > field.height {
                None
            } else {
                Some(Enemy { y, ..e.clone() })
            }
        })
        .collect()
}

/// Power-ups descend like enemies; uncollected ones fall off the field.
pub fn advance_powerups(powerups: &[Powerup], field: &Field, elapsed_ms: f32) -> Vec<Powerup> {
    let dt = time_scale(elapsed_ms);
    powerups
        .iter()
        .filter_map(|p| {
            let y = p.y + p.speed * dt;
            if y > field.height {
                None
            } else {
                Some(Powerup { y, ..p.clone() })
            }
        })
        .collect()
}

/// Particles drift on their own velocity and burn down their lifetime;
/// removed when the lifetime is spent.
pub fn advance_particles(particles: &[Particle], elapsed_ms: f32) -> Vec<Particle> {
    let dt = time_scale(elapsed_ms);
    particles
        .iter()
        .filter_map(|p| {
            let life = p.life - dt;
            if life <= 0.0 {
                None
            } else {
                Some(Particle {
                    x: p.x + p.vx * dt,
                    y: p.y + p.vy * dt,
                    life,
                    ..p.clone()
                })
            }
        })
        .collect()
}

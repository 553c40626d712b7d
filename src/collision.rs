/// Collision detection and resolution for one tick.
///
/// Takes the post-movement positions (the loop integrates before it
/// collides), returns the surviving entities plus the scoring and ship
/// changes that follow from the overlaps found.  Iteration is in spawn
/// order (`Vec` order), which fixes which single entity is credited when
/// several valid targets overlap in the same tick.

use crate::entities::{
    Bullet, Enemy, GameEvent, Powerup, PowerupKind, Ship, POWERUP_DURATION_MS,
};

/// Everything one resolution pass produced.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub score_delta: u32,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<Powerup>,
    pub events: Vec<GameEvent>,
}

pub fn detect_and_resolve(
    ship: &Ship,
    bullets: &[Bullet],
    enemies: &[Enemy],
    powerups: &[Powerup],
    now_ms: u64,
) -> Resolution {
    let mut ship = ship.clone();
    let mut enemies: Vec<Enemy> = enemies.to_vec();
    let mut events: Vec<GameEvent> = Vec::new();
    let mut score_delta: u32 = 0;

    // ── Bullets ↔ enemies ────────────────────────────────────────────────────
    // A bullet affects at most one enemy per tick: the first intersecting one
    // that still has hit-points pending.  Score is awarded exactly when an
    // enemy's hit-points reach zero, never twice.
    let mut spent = vec![false; bullets.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        let bullet_rect = bullet.rect();
        for enemy in enemies.iter_mut() {
            if enemy.hit_points <= 0 {
                continue;
            }
            if bullet_rect.intersects(&enemy.rect()) {
                spent[bi] = true;
                enemy.hit_points -= 1;

                let (ix, iy) = bullet_rect.center();
                events.push(GameEvent::Hit { x: ix, y: iy, color: enemy.kind.color() });

                if enemy.hit_points == 0 {
                    score_delta += enemy.kind.score();
                    let (ex, ey) = enemy.rect().center();
                    events.push(GameEvent::Explosion { x: ex, y: ey, color: enemy.kind.color() });
                }
                break;
            }
        }
    }

    let bullets: Vec<Bullet> = bullets
        .iter()
        .enumerate()
        .filter(|(i, _)| !spent[*i])
        .map(|(_, b)| b.clone())
        .collect();

    // ── Ship ↔ enemies ───────────────────────────────────────────────────────
    // Skipped entirely while the shield is up.  At most one damaging
    // collision per tick; the rammed enemy is removed without score.
    let mut rammed: Option<usize> = None;

    if !ship.shield_active(now_ms) {
        let ship_rect = ship.rect();
        for (ei, enemy) in enemies.iter().enumerate() {
            if enemy.hit_points <= 0 {
                continue;
            }
            if ship_rect.intersects(&enemy.rect()) {
                rammed = Some(ei);
                ship.health = (ship.health - enemy.kind.contact_damage()).max(0);

                let (ex, ey) = enemy.rect().center();
                events.push(GameEvent::Explosion { x: ex, y: ey, color: enemy.kind.color() });
                break;
            }
        }
    }

    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .enumerate()
        .filter(|(i, e)| e.hit_points > 0 && rammed != Some(*i))
        .map(|(_, e)| e)
        .collect();

    // ── Ship ↔ power-ups ─────────────────────────────────────────────────────
    // Every overlapping power-up is collected.  Re-collecting an active
    // effect resets its deadline; nothing stacks.
    let ship_rect = ship.rect();
    let mut surviving_powerups = Vec::with_capacity(powerups.len());

    for powerup in powerups {
        if ship_rect.intersects(&powerup.rect()) {
            let deadline = now_ms + POWERUP_DURATION_MS;
            match powerup.kind {
                PowerupKind::Shield => ship.shield_until = deadline,
                PowerupKind::RapidFire => ship.rapid_until = deadline,
                PowerupKind::MultiShot => ship.multi_until = deadline,
            }
            let (px, py) = powerup.rect().center();
            events.push(GameEvent::PowerupCollected { x: px, y: py, kind: powerup.kind });
        } else {
            surviving_powerups.push(powerup.clone());
        }
    }

    Resolution {
        score_delta,
        ship,
        bullets,
        enemies,
        powerups: surviving_powerups,
        events,
    }
}

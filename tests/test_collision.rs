use cyber_shooter::collision::*;
use cyber_shooter::entities::*;

fn field() -> Field {
    Field::new(800.0, 600.0, false)
}

fn ship() -> Ship {
    Ship::spawn(&field()) // x=370, y=500, 60×40, health 100
}

fn enemy_at(kind: EnemyKind, x: f32, y: f32) -> Enemy {
    Enemy {
        x,
        y,
        width: kind.size(),
        height: kind.size(),
        speed: kind.speed(1),
        hit_points: kind.hit_points(),
        kind,
    }
}

fn bullet_at(x: f32, y: f32) -> Bullet {
    Bullet::spawn(x, y)
}

fn powerup_on_ship(kind: PowerupKind) -> Powerup {
    Powerup {
        y: 500.0,
        ..Powerup::spawn(kind, 380.0)
    }
}

// ── Bullet ↔ enemy ────────────────────────────────────────────────────────────

#[test]
fn bullet_decrements_enemy_hit_points() {
    let enemies = vec![enemy_at(EnemyKind::Tank, 100.0, 100.0)];
    let bullets = vec![bullet_at(110.0, 110.0)];
    let res = detect_and_resolve(&ship(), &bullets, &enemies, &[], 0);

    assert_eq!(res.enemies.len(), 1);
    assert_eq!(res.enemies[0].hit_points, 2);
    assert!(res.bullets.is_empty()); // consumed on first hit
    assert_eq!(res.score_delta, 0); // not dead yet
    assert!(res.events.iter().any(|e| matches!(e, GameEvent::Hit { .. })));
    assert!(!res.events.iter().any(|e| matches!(e, GameEvent::Explosion { .. })));
}

#[test]
fn lethal_hit_removes_enemy_and_awards_score_once() {
    let enemies = vec![enemy_at(EnemyKind::Standard, 100.0, 100.0)];
    let bullets = vec![bullet_at(110.0, 110.0)];
    let res = detect_and_resolve(&ship(), &bullets, &enemies, &[], 0);

    assert!(res.enemies.is_empty());
    assert_eq!(res.score_delta, 10);
    assert!(res.events.iter().any(|e| matches!(e, GameEvent::Explosion { .. })));
}

#[test]
fn score_matches_variant() {
    for (kind, score) in [
        (EnemyKind::Standard, 10),
        (EnemyKind::Fast, 20),
        (EnemyKind::Tank, 30),
    ] {
        let mut enemy = enemy_at(kind, 100.0, 100.0);
        enemy.hit_points = 1; // one hit from death
        let bullets = vec![bullet_at(110.0, 110.0)];
        let res = detect_and_resolve(&ship(), &bullets, &[enemy], &[], 0);
        assert_eq!(res.score_delta, score);
    }
}

#[test]
fn bullet_affects_at_most_one_enemy() {
    // Two overlapping standard enemies under one bullet: only the first in
    // spawn order takes damage this tick
    let enemies = vec![
        enemy_at(EnemyKind::Standard, 100.0, 100.0),
        enemy_at(EnemyKind::Standard, 105.0, 105.0),
    ];
    let bullets = vec![bullet_at(110.0, 110.0)];
    let res = detect_and_resolve(&ship(), &bullets, &enemies, &[], 0);

    assert_eq!(res.enemies.len(), 1);
    assert_eq!(res.enemies[0].x, 105.0); // the second one is untouched
    assert_eq!(res.enemies[0].hit_points, 1);
    assert_eq!(res.score_delta, 10);
}

#[test]
fn dead_enemy_absorbs_no_further_bullets() {
    // Two bullets over one 1-hp enemy: the second bullet survives and the
    // score is awarded exactly once
    let enemies = vec![enemy_at(EnemyKind::Fast, 100.0, 100.0)];
    let bullets = vec![bullet_at(105.0, 105.0), bullet_at(110.0, 110.0)];
    let res = detect_and_resolve(&ship(), &bullets, &enemies, &[], 0);

    assert!(res.enemies.is_empty());
    assert_eq!(res.bullets.len(), 1);
    assert_eq!(res.score_delta, 20);
}

#[test]
fn two_bullets_wear_down_a_tank() {
    let enemies = vec![enemy_at(EnemyKind::Tank, 100.0, 100.0)];
    let bullets = vec![bullet_at(105.0, 105.0), bullet_at(120.0, 120.0)];
    let res = detect_and_resolve(&ship(), &bullets, &enemies, &[], 0);

    assert_eq!(res.enemies[0].hit_points, 1); // 3 − 2
    assert!(res.bullets.is_empty());
    assert_eq!(res.score_delta, 0);
}

#[test]
fn missing_bullet_survives() {
    let enemies = vec![enemy_at(EnemyKind::Standard, 100.0, 100.0)];
    let bullets = vec![bullet_at(500.0, 100.0)];
    let res = detect_and_resolve(&ship(), &bullets, &enemies, &[], 0);

    assert_eq!(res.bullets.len(), 1);
    assert_eq!(res.enemies.len(), 1);
}

// ── Ship ↔ enemy ──────────────────────────────────────────────────────────────

#[test]
fn ramming_enemy_damages_ship_and_is_removed_without_score() {
    let enemies = vec![enemy_at(EnemyKind::Fast, 380.0, 490.0)]; // on the ship
    let res = detect_and_resolve(&ship(), &[], &enemies, &[], 0);

    assert!(res.enemies.is_empty());
    assert_eq!(res.ship.health, 85); // 100 − 15
    assert_eq!(res.score_delta, 0);
}

#[test]
fn contact_damage_matches_variant() {
    for (kind, damage) in [
        (EnemyKind::Standard, 10),
        (EnemyKind::Fast, 15),
        (EnemyKind::Tank, 25),
    ] {
        let enemies = vec![enemy_at(kind, 380.0, 490.0)];
        let res = detect_and_resolve(&ship(), &[], &enemies, &[], 0);
        assert_eq!(res.ship.health, 100 - damage);
    }
}

#[test]
fn at_most_one_damaging_collision_per_tick() {
    // Two enemies on the ship in the same tick: only the first costs health
    let enemies = vec![
        enemy_at(EnemyKind::Standard, 375.0, 490.0),
        enemy_at(EnemyKind::Tank, 380.0, 495.0),
    ];
    let res = detect_and_resolve(&ship(), &[], &enemies, &[], 0);

    assert_eq!(res.ship.health, 90); // standard only
    assert_eq!(res.enemies.len(), 1); // the tank is still there
    assert_eq!(res.enemies[0].kind, EnemyKind::Tank);
}

#[test]
fn shield_blocks_all_contact_damage() {
    let mut shielded = ship();
    shielded.shield_until = 10_000;

    for kind in [EnemyKind::Standard, EnemyKind::Fast, EnemyKind::Tank] {
        let enemies = vec![enemy_at(kind, 380.0, 490.0)];
        let res = detect_and_resolve(&shielded, &[], &enemies, &[], 5_000);
        assert_eq!(res.ship.health, 100);
        assert_eq!(res.enemies.len(), 1); // shielded ship passes through
    }
}

#[test]
fn expired_shield_no_longer_protects() {
    let mut stale = ship();
    stale.shield_until = 1_000;
    let enemies = vec![enemy_at(EnemyKind::Standard, 380.0, 490.0)];
    let res = detect_and_resolve(&stale, &[], &enemies, &[], 2_000);
    assert_eq!(res.ship.health, 90);
}

#[test]
fn health_clamps_at_zero() {
    let mut wounded = ship();
    wounded.health = 20;
    let enemies = vec![enemy_at(EnemyKind::Tank, 380.0, 490.0)]; // 25 damage
    let res = detect_and_resolve(&wounded, &[], &enemies, &[], 0);
    assert_eq!(res.ship.health, 0); // never negative
}

// ── Ship ↔ power-up ───────────────────────────────────────────────────────────

#[test]
fn collecting_shield_sets_deadline() {
    let powerups = vec![powerup_on_ship(PowerupKind::Shield)];
    let res = detect_and_resolve(&ship(), &[], &[], &powerups, 2_000);

    assert!(res.powerups.is_empty());
    assert_eq!(res.ship.shield_until, 2_000 + POWERUP_DURATION_MS);
    assert!(res
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::PowerupCollected { kind: PowerupKind::Shield, .. })));
}

#[test]
fn recollection_resets_deadline_instead_of_stacking() {
    let mut boosted = ship();
    boosted.rapid_until = 9_000; // active until 9 s
    let powerups = vec![powerup_on_ship(PowerupKind::RapidFire)];
    let res = detect_and_resolve(&boosted, &[], &[], &powerups, 5_000);

    // Reset to now + duration, not 9 000 + duration
    assert_eq!(res.ship.rapid_until, 13_000);
}

#[test]
fn all_overlapping_powerups_collected_in_one_tick() {
    let powerups = vec![
        powerup_on_ship(PowerupKind::Shield),
        powerup_on_ship(PowerupKind::MultiShot),
    ];
    let res = detect_and_resolve(&ship(), &[], &[], &powerups, 1_000);

    assert!(res.powerups.is_empty());
    assert!(res.ship.shield_active(2_000));
    assert!(res.ship.multi_active(2_000));
}

#[test]
fn distant_powerup_is_left_alone() {
    let powerups = vec![Powerup::spawn(PowerupKind::Shield, 100.0)]; // up top
    let res = detect_and_resolve(&ship(), &[], &[], &powerups, 0);
    assert_eq!(res.powerups.len(), 1);
    assert_eq!(res.ship.shield_until, 0);
}

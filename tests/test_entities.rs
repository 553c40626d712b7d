use cyber_shooter::entities::*;

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect { x, y, w, h }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rects_overlapping_intersect() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn rects_touching_edges_do_not_intersect() {
    // Strict inequalities: sharing an edge is not a collision
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let right = rect(10.0, 0.0, 10.0, 10.0);
    let below = rect(0.0, 10.0, 10.0, 10.0);
    assert!(!a.intersects(&right));
    assert!(!a.intersects(&below));
}

#[test]
fn rects_disjoint_do_not_intersect() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(50.0, 50.0, 10.0, 10.0);
    assert!(!a.intersects(&b));
}

#[test]
fn rect_contained_in_other_intersects() {
    let outer = rect(0.0, 0.0, 100.0, 100.0);
    let inner = rect(40.0, 40.0, 5.0, 5.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn rect_center() {
    let r = rect(10.0, 20.0, 40.0, 60.0);
    assert_eq!(r.center(), (30.0, 50.0));
}

// ── Enemy variant tables ──────────────────────────────────────────────────────

#[test]
fn enemy_kind_sizes() {
    assert_eq!(EnemyKind::Standard.size(), 40.0);
    assert_eq!(EnemyKind::Fast.size(), 30.0);
    assert_eq!(EnemyKind::Tank.size(), 50.0);
}

#[test]
fn enemy_kind_hit_points_and_score() {
    assert_eq!(EnemyKind::Standard.hit_points(), 1);
    assert_eq!(EnemyKind::Fast.hit_points(), 1);
    assert_eq!(EnemyKind::Tank.hit_points(), 3);

    assert_eq!(EnemyKind::Standard.score(), 10);
    assert_eq!(EnemyKind::Fast.score(), 20);
    assert_eq!(EnemyKind::Tank.score(), 30);
}

#[test]
fn enemy_kind_contact_damage() {
    assert_eq!(EnemyKind::Standard.contact_damage(), 10);
    assert_eq!(EnemyKind::Fast.contact_damage(), 15);
    assert_eq!(EnemyKind::Tank.contact_damage(), 25);
}

#[test]
fn enemy_speed_scales_linearly_with_level() {
    // speed = base + level × slope, distinct slope per variant
    assert!((EnemyKind::Standard.speed(1) - 1.65).abs() < 1e-6);
    assert!((EnemyKind::Standard.speed(5) - 2.25).abs() < 1e-6);
    assert!((EnemyKind::Fast.speed(1) - 2.2).abs() < 1e-6);
    assert!((EnemyKind::Tank.speed(10) - 1.6).abs() < 1e-6);
}

#[test]
fn enemy_spawn_resolves_variant_once() {
    let field = Field::new(800.0, 600.0, false);
    let e = Enemy::spawn(EnemyKind::Tank, 100.0, 2, &field);
    assert_eq!(e.width, 50.0);
    assert_eq!(e.height, 50.0);
    assert_eq!(e.hit_points, 3);
    assert_eq!(e.kind, EnemyKind::Tank);
    // Just above the visible top edge
    assert_eq!(e.y, -50.0);
}

#[test]
fn compact_field_shrinks_enemy_size_and_speed() {
    let compact = Field::new(800.0, 600.0, true);
    let e = Enemy::spawn(EnemyKind::Standard, 0.0, 1, &compact);
    assert!((e.width - 32.0).abs() < 1e-6); // 40 × 0.8
    assert!((e.speed - 1.65 * 0.8).abs() < 1e-6);
}

#[test]
fn compact_field_lowers_caps() {
    let normal = Field::new(800.0, 600.0, false);
    let compact = Field::new(800.0, 600.0, true);
    assert_eq!(normal.max_enemies(), 10);
    assert_eq!(compact.max_enemies(), 5);
    assert_eq!(normal.max_particles(), 60);
    assert_eq!(compact.max_particles(), 30);
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[test]
fn ship_spawns_centered_near_bottom() {
    let field = Field::new(800.0, 600.0, false);
    let ship = Ship::spawn(&field);
    assert_eq!(ship.x, 370.0); // width/2 − SHIP_WIDTH/2
    assert_eq!(ship.y, 500.0); // height − 100
    assert_eq!(ship.health, MAX_HEALTH);
}

#[test]
fn ship_effect_deadlines() {
    let field = Field::new(800.0, 600.0, false);
    let mut ship = Ship::spawn(&field);
    assert!(!ship.shield_active(0));

    ship.shield_until = 5_000;
    assert!(ship.shield_active(4_999));
    assert!(!ship.shield_active(5_000)); // deadline itself is expired
    assert!(!ship.shield_active(5_001));

    ship.rapid_until = 100;
    ship.multi_until = 200;
    assert!(ship.rapid_active(99));
    assert!(ship.multi_active(199));
    assert!(!ship.rapid_active(150));
}

// ── Particles ─────────────────────────────────────────────────────────────────

#[test]
fn particle_alpha_is_life_ratio() {
    let p = Particle {
        x: 0.0,
        y: 0.0,
        size: 2.0,
        color: (255, 255, 255),
        vx: 0.0,
        vy: 0.0,
        life: 5.0,
        max_life: 20.0,
    };
    assert!((p.alpha() - 0.25).abs() < 1e-6);
}

#[test]
fn bullet_spawn_dimensions() {
    let b = Bullet::spawn(100.0, 200.0);
    assert_eq!(b.width, BULLET_WIDTH);
    assert_eq!(b.height, BULLET_HEIGHT);
    assert_eq!(b.speed, BULLET_SPEED);
}

#[test]
fn powerup_spawn_above_field() {
    let p = Powerup::spawn(PowerupKind::Shield, 50.0);
    assert_eq!(p.y, -POWERUP_SIZE);
    assert_eq!(p.speed, POWERUP_SPEED);
    assert_eq!(p.kind, PowerupKind::Shield);
}

/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  Field coordinates are virtual units and
/// get scaled to the terminal grid per frame.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use cyber_shooter::entities::{Enemy, EnemyKind, Particle, Powerup, PowerupKind, Rgb, Ship};
use cyber_shooter::game::{GamePhase, GameState};

// ── Colour palette (UI chrome; entities use their model colors) ──────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_SHIP: Color = Color::White;
const C_SHIELD_RING: Color = Color::Cyan;
const C_BULLET: Color = Color::Magenta;
const C_STAR: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

fn rgb(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

/// Dim an RGB color toward black; used for particle fade-out.
fn faded(c: Rgb, alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    Color::Rgb {
        r: (c.0 as f32 * a) as u8,
        g: (c.1 as f32 * a) as u8,
        b: (c.2 as f32 * a) as u8,
    }
}

// ── Coordinate mapping ───────────────────────────────────────────────────────

struct Viewport {
    cols: u16,
    rows: u16,
    field_w: f32,
    field_h: f32,
}

impl Viewport {
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 || self.field_w <= 0.0 || self.field_h <= 0.0 {
            return None;
        }
        let cx = (x / self.field_w * self.cols as f32) as u16;
        let cy = (y / self.field_h * self.rows as f32) as u16;
        if cx < self.cols && cy < self.rows {
            Some((cx, cy))
        } else {
            None
        }
    }
}

// ── Public entry point ───────────────────────────────────────────────────────

/// Render one complete frame.  `now_ms` is only used for the HUD's
/// remaining-effect countdowns.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    now_ms: u64,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let vp = Viewport {
        cols,
        rows,
        field_w: state.field.width,
        field_h: state.field.height,
    };

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_stars(out, &vp)?;

    for particle in &state.particles {
        draw_particle(out, &vp, particle)?;
    }
    for powerup in &state.powerups {
        draw_powerup(out, &vp, powerup)?;
    }
    for enemy in &state.enemies {
        draw_enemy(out, &vp, enemy)?;
    }
    for bullet in &state.bullets {
        if let Some((cx, cy)) = vp.cell(bullet.x, bullet.y) {
            out.queue(cursor::MoveTo(cx, cy))?;
            out.queue(style::SetForegroundColor(C_BULLET))?;
            out.queue(Print("║"))?;
        }
    }

    draw_ship(out, &vp, &state.ship, now_ms)?;
    draw_hud(out, state, now_ms, cols)?;

    match state.phase {
        GamePhase::Idle => draw_start_overlay(out, cols, rows)?,
        GamePhase::Paused => draw_pause_overlay(out, cols, rows)?,
        GamePhase::Over => draw_game_over(out, state, cols, rows)?,
        GamePhase::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ───────────────────────────────────────────────────────────────

/// Sparse static starfield.  A tiny hash over the cell index keeps the stars
/// in place between frames instead of twinkling with every redraw.
fn draw_stars<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for row in 1..vp.rows.saturating_sub(1) {
        for col in 0..vp.cols {
            let n = (row as u32)
                .wrapping_mul(2654435761)
                .wrapping_add(col as u32)
                .wrapping_mul(2246822519);
            if n % 97 == 0 {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print("·"))?;
            }
        }
    }
    Ok(())
}

// ── Entities ─────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(
    out: &mut W,
    vp: &Viewport,
    ship: &Ship,
    now_ms: u64,
) -> std::io::Result<()> {
    let (cx, cy) = ship.rect().center();
    let Some((col, row)) = vp.cell(cx, cy) else {
        return Ok(());
    };

    out.queue(style::SetForegroundColor(C_SHIP))?;
    out.queue(cursor::MoveTo(col, row.saturating_sub(1)))?;
    out.queue(Print("▲"))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
    out.queue(Print("/█\\"))?;

    if ship.shield_active(now_ms) {
        out.queue(style::SetForegroundColor(C_SHIELD_RING))?;
        out.queue(cursor::MoveTo(col.saturating_sub(2), row))?;
        out.queue(Print("⟮"))?;
        out.queue(cursor::MoveTo(col + 2, row))?;
        out.queue(Print("⟯"))?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, vp: &Viewport, enemy: &Enemy) -> std::io::Result<()> {
    let (cx, cy) = enemy.rect().center();
    let Some((col, row)) = vp.cell(cx, cy) else {
        return Ok(());
    };

    out.queue(style::SetForegroundColor(rgb(enemy.kind.color())))?;
    let sprite = match enemy.kind {
        EnemyKind::Standard => "«▼»",
        EnemyKind::Fast => "◆",
        EnemyKind::Tank => "[██]",
    };
    out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
    out.queue(Print(sprite))?;

    // Damaged enemies show their remaining hit-points above the sprite.
    if enemy.hit_points < enemy.kind.hit_points() && row > 0 {
        let pips = "▪".repeat(enemy.hit_points.max(0) as usize);
        out.queue(cursor::MoveTo(col.saturating_sub(1), row - 1))?;
        out.queue(Print(pips))?;
    }
    Ok(())
}

fn draw_powerup<W: Write>(out: &mut W, vp: &Viewport, powerup: &Powerup) -> std::io::Result<()> {
    let (cx, cy) = powerup.rect().center();
    let Some((col, row)) = vp.cell(cx, cy) else {
        return Ok(());
    };

    let badge = match powerup.kind {
        PowerupKind::Shield => "[S]",
        PowerupKind::RapidFire => "[R]",
        PowerupKind::MultiShot => "[M]",
    };
    out.queue(style::SetForegroundColor(rgb(powerup.kind.color())))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
    out.queue(Print(badge))?;
    Ok(())
}

fn draw_particle<W: Write>(out: &mut W, vp: &Viewport, particle: &Particle) -> std::io::Result<()> {
    let Some((col, row)) = vp.cell(particle.x, particle.y) else {
        return Ok(());
    };
    let alpha = particle.alpha();
    out.queue(style::SetForegroundColor(faded(particle.color, alpha)))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(if alpha > 0.5 { "•" } else { "·" }))?;
    Ok(())
}

// ── HUD (row 0) ──────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    now_ms: u64,
    cols: u16,
) -> std::io::Result<()> {
    // Health bar — left
    let bar_cells = 10usize;
    let pct = state.ship.health.clamp(0, 100) as f32 / 100.0;
    let filled = (pct * bar_cells as f32).round() as usize;
    let bar_color = if state.ship.health > 60 {
        Color::Green
    } else if state.ship.health > 30 {
        Color::Yellow
    } else {
        Color::Red
    };

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(bar_color))?;
    out.queue(Print(format!(
        "HP {:>3} {}{}",
        state.ship.health,
        "█".repeat(filled),
        "░".repeat(bar_cells - filled.min(bar_cells)),
    )))?;

    // Level — centre
    let level_str = format!("[ LV {} ]", state.level);
    let lx = (cols / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Active effect tags + score — right side
    let mut tags = String::new();
    let secs = |until: u64| (until.saturating_sub(now_ms) / 1000) + 1;
    if state.ship.shield_active(now_ms) {
        tags.push_str(&format!("[S {:>2}s] ", secs(state.ship.shield_until)));
    }
    if state.ship.rapid_active(now_ms) {
        tags.push_str(&format!("[R {:>2}s] ", secs(state.ship.rapid_until)));
    }
    if state.ship.multi_active(now_ms) {
        tags.push_str(&format!("[M {:>2}s] ", secs(state.ship.multi_until)));
    }

    let score_str = if state.best_score > 0 {
        format!("Score:{:>6}  Hi:{:>6}", state.score, state.best_score)
    } else {
        format!("Score:{:>6}", state.score)
    };
    let right = format!("{}{}", tags, score_str);
    let rx = cols.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;

    if !tags.is_empty() {
        out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
        out.queue(Print(&tags))?;
    }
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score_str))?;
    Ok(())
}

// ── Overlays ─────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    cols: u16,
    row: u16,
    color: Color,
    msg: &str,
) -> std::io::Result<()> {
    let col = (cols / 2).saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(msg))?;
    Ok(())
}

fn draw_start_overlay<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let cy = rows / 2;
    draw_centered(out, cols, cy.saturating_sub(2), Color::Cyan, "★  CYBER  SHOOTER  ★")?;
    draw_centered(out, cols, cy, Color::White, "Click or press SPACE to start")?;
    draw_centered(
        out,
        cols,
        cy + 2,
        C_HINT,
        "Mouse / ← → : Move   Click / SPACE : Shoot   P : Pause   Q : Quit",
    )?;
    Ok(())
}

fn draw_pause_overlay<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let cy = rows / 2;
    draw_centered(out, cols, cy, Color::Yellow, "║  PAUSED  ║")?;
    draw_centered(out, cols, cy + 1, C_HINT, "Press P to continue")?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let is_best = state.score >= state.best_score && state.score > 0;
    let best = state.best_score.max(state.score);

    let start_row = (rows / 2).saturating_sub(3);
    draw_centered(out, cols, start_row, Color::Red, "╔════════════════════╗")?;
    draw_centered(out, cols, start_row + 1, Color::Red, "║    GAME  OVER      ║")?;
    draw_centered(out, cols, start_row + 2, Color::Red, "╚════════════════════╝")?;

    let score_line = format!("Final Score: {:>6}", state.score);
    draw_centered(out, cols, start_row + 3, Color::Yellow, &score_line)?;

    let best_line = if is_best {
        format!("★ NEW BEST: {:>6} ★", best)
    } else {
        format!("Best Score:  {:>6}", best)
    };
    let best_color = if is_best { Color::Yellow } else { Color::DarkGrey };
    draw_centered(out, cols, start_row + 4, best_color, &best_line)?;

    draw_centered(out, cols, start_row + 5, Color::White, "R - Play Again  Q - Quit")?;
    Ok(())
}

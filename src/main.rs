mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind, EnableMouseCapture, DisableMouseCapture,
    },
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use cyber_shooter::entities::{Field, GameEvent};
use cyber_shooter::game::{self, GamePhase, GameState};
use cyber_shooter::score_store;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Virtual field dimensions; the renderer scales them to the terminal.
const FIELD_WIDTH: f32 = 800.0;
const FIELD_HEIGHT: f32 = 600.0;

/// Narrow terminals get the compact profile: smaller, slower enemies and
/// lower entity caps.
const COMPACT_COLS: u16 = 80;

/// Map a terminal column to a field x-coordinate.
fn field_x(col: u16, cols: u16) -> f32 {
    if cols == 0 {
        return 0.0;
    }
    col as f32 / cols as f32 * FIELD_WIDTH
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the user quits.  The loop itself only sequences input, tick and
/// render; every state transition lives in the library.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let clock = Instant::now();
    let mut prev_frame = Instant::now();
    let score_path = score_store::default_path();

    loop {
        let frame_start = Instant::now();
        let now_ms = clock.elapsed().as_millis() as u64;
        let (cols, rows) = terminal::size()?;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. })
                    if kind == KeyEventKind::Press || kind == KeyEventKind::Repeat =>
                {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('p') | KeyCode::Char('P') => {
                            *state = game::toggle_pause(state);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.phase == GamePhase::Over =>
                        {
                            let (next, _) = game::start(state, now_ms);
                            *state = next;
                        }
                        KeyCode::Char(' ') => match state.phase {
                            GamePhase::Idle | GamePhase::Over => {
                                let (next, _) = game::start(state, now_ms);
                                *state = next;
                            }
                            _ => {
                                let (next, _) = game::fire(state, now_ms);
                                *state = next;
                            }
                        },
                        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                            *state = game::move_ship_left(state);
                        }
                        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                            *state = game::move_ship_right(state);
                        }
                        _ => {}
                    }
                }
                Event::Mouse(MouseEvent { kind, column, .. }) => match kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                        *state = game::set_ship_x(state, field_x(column, cols));
                    }
                    MouseEventKind::Down(MouseButton::Left) => match state.phase {
                        GamePhase::Idle | GamePhase::Over => {
                            let (next, _) = game::start(state, now_ms);
                            *state = next;
                        }
                        _ => {
                            let (next, _) = game::fire(state, now_ms);
                            *state = next;
                        }
                    },
                    _ => {}
                },
                _ => {}
            }
        }

        // ── Advance the simulation (paused/idle/over frames still render) ─────
        let elapsed_ms = prev_frame.elapsed().as_secs_f32() * 1000.0;
        prev_frame = Instant::now();

        if state.phase == GamePhase::Running {
            let (next, events) = game::tick(state, now_ms, elapsed_ms, &mut rng);
            *state = next;

            // Persist the best score the moment a run ends.
            if events.contains(&GameEvent::GameOver) && state.score > state.best_score {
                state.best_score = state.score;
                score_store::save(&score_path, state.best_score);
            }
        }

        display::render(out, state, now_ms, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let (cols, _) = terminal::size()?;
    let field = Field::new(FIELD_WIDTH, FIELD_HEIGHT, cols < COMPACT_COLS);
    let best_score = score_store::load(&score_store::default_path());
    let mut state = game::init_state(field, best_score);

    let result = game_loop(&mut out, &mut state, &rx);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

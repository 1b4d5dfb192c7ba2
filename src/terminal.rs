//! Terminal front-end: keyboard in, character grid out.
//!
//! Holds no game rules. Keys become engine calls, the engine's scheduler is
//! a [`PollTimer`] checked between input polls, and every change is drawn
//! as a full redraw of the board.

use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use log::debug;
use rand::Rng;

use crate::direction::Direction;
use crate::events::{EndReason, GameEvent, Snapshot, Status};
use crate::game::GameEngine;
use crate::grid::Coordinate;
use crate::highscore::HighScoreStore;
use crate::scheduler::PollTimer;

/// Longest time to block on input when no tick is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
    Faster,
    Slower,
    Quit,
}

impl Command {
    pub fn from_key_event(key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        let command = match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => Command::Turn(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S') => Command::Turn(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A') => Command::Turn(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => Command::Turn(Direction::Right),
            KeyCode::Char(' ') | KeyCode::Char('p' | 'P') => Command::TogglePause,
            KeyCode::Char('r' | 'R') | KeyCode::Enter => Command::Restart,
            KeyCode::Char('+' | '=') => Command::Faster,
            KeyCode::Char('-' | '_') => Command::Slower,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Applies one command. Returns false when the player asked to quit.
pub fn apply_command<R: Rng>(engine: &mut GameEngine<PollTimer, R>, command: Command) -> bool {
    match command {
        Command::Turn(direction) => {
            // an arrow key also starts a fresh game
            if engine.status() == Status::Idle {
                engine.start();
            }
            engine.set_direction(direction);
        }
        Command::TogglePause => engine.toggle_pause(),
        Command::Restart => {
            engine.reset();
            engine.start();
        }
        Command::Faster => engine.set_level(engine.level().faster()),
        Command::Slower => engine.set_level(engine.level().slower()),
        Command::Quit => return false,
    }
    true
}

/// Runs the game until the player quits.
pub fn run<R: Rng, H: HighScoreStore>(
    engine: &mut GameEngine<PollTimer, R>,
    store: &mut H,
) -> Result<()> {
    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let mut out = stdout();
    execute!(out, Hide).context("Failed to hide cursor")?;

    let result = game_loop(engine, store, &mut out);

    terminal::disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(out, Show, MoveTo(0, 0), Clear(ClearType::All))
        .context("Failed to restore terminal")?;
    result?;

    println!(
        "Final score: {}  High score: {}",
        engine.score(),
        engine.high_score()
    );
    Ok(())
}

fn game_loop<R: Rng, H: HighScoreStore>(
    engine: &mut GameEngine<PollTimer, R>,
    store: &mut H,
    out: &mut Stdout,
) -> Result<()> {
    let mut last_end: Option<EndReason> = None;
    draw(out, &engine.snapshot(), last_end)?;

    loop {
        let wait = engine
            .scheduler()
            .remaining(Instant::now())
            .unwrap_or(IDLE_POLL);

        let mut dirty = false;
        if event::poll(wait).context("Failed to poll input")? {
            if let Event::Key(key) = event::read().context("Failed to read input")? {
                if key.kind == KeyEventKind::Press {
                    if let Some(command) = Command::from_key_event(key) {
                        if !apply_command(engine, command) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                }
            }
        }

        if engine.scheduler_mut().due(Instant::now()) {
            engine.tick();
            dirty = true;
        }

        for event in engine.drain_events() {
            match event {
                GameEvent::PersistHighScore(score) => store.save(score),
                GameEvent::Ate { score } => {
                    debug!("[Terminal] ate, score {}", score);
                    // terminal bell stands in for audio
                    queue!(out, Print('\x07')).context("Failed to ring bell")?;
                }
                GameEvent::GameOver { reason, .. } => last_end = Some(reason),
                GameEvent::StatusChanged(snapshot) if snapshot.status != Status::GameOver => {
                    last_end = None;
                }
                GameEvent::StatusChanged(_) | GameEvent::Ticked(_) => {}
            }
        }

        if dirty {
            draw(out, &engine.snapshot(), last_end)?;
        }
    }
}

/// Colour for body segment `index`, fading from head to tail.
fn segment_color(index: usize, len: usize) -> Color {
    let shade = 255 - (index * 155 / len.max(1)) as u8;
    Color::Rgb {
        r: 0,
        g: shade,
        b: 60,
    }
}

fn draw(out: &mut Stdout, snapshot: &Snapshot, end: Option<EndReason>) -> Result<()> {
    let len = snapshot.body.len();
    let side = snapshot.board_size as u16;
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    // border is one cell wider than the board on every side
    for x in 0..side + 2 {
        queue!(out, MoveTo(x, 0), Print('#'), MoveTo(x, side + 1), Print('#'))?;
    }
    for y in 1..side + 1 {
        queue!(out, MoveTo(0, y), Print('#'), MoveTo(side + 1, y), Print('#'))?;
    }

    let to_screen = |c: Coordinate| (c.x as u16 + 1, c.y as u16 + 1);

    let (fx, fy) = to_screen(snapshot.food);
    queue!(
        out,
        MoveTo(fx, fy),
        SetForegroundColor(Color::Red),
        Print('*')
    )?;
    for (index, &segment) in snapshot.body.iter().enumerate().rev() {
        let (sx, sy) = to_screen(segment);
        let glyph = if index == 0 { 'O' } else { 'o' };
        queue!(
            out,
            MoveTo(sx, sy),
            SetForegroundColor(segment_color(index, len)),
            Print(glyph)
        )?;
    }
    queue!(out, ResetColor)?;

    let status = match (snapshot.status, end) {
        (Status::Idle, _) => "Press an arrow key or space to start",
        (Status::Running, _) => "Running",
        (Status::Paused, _) => "Paused - space to resume",
        (Status::GameOver, Some(EndReason::BoardFull)) => "Board full, you win! r to restart",
        (Status::GameOver, _) => "Game over! r to restart",
    };
    queue!(
        out,
        MoveTo(0, side + 2),
        Print(format!(
            "Score: {}  High: {}  Level: {}",
            snapshot.score,
            snapshot.high_score,
            snapshot.level.get()
        )),
        MoveTo(0, side + 3),
        Print(status),
        MoveTo(0, side + 4),
        Print("Arrows/WASD move, space pause, +/- speed, q quit")
    )?;

    out.flush().context("Failed to flush terminal")?;
    Ok(())
}

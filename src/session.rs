//! Session controller: owns one grid and drives it from terminal input.
//!
//! Lifecycle is `Idle -> Running -> Terminated`. At most one session may
//! be running process-wide (the terminal is a scoped global resource);
//! the active slot is an atomic flag held through an RAII guard so every
//! exit path releases it.
//!
//! External conditions (terminal resize, Ctrl-C) arrive on the same
//! crossterm event stream the loop polls and are mapped to explicit
//! [`SessionEvent`]s: a redraw request repaints everything, a shutdown
//! request tears the terminal down and exits the process.

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use thiserror::Error;

use tui_2048_core::{Grid, GridError};
use tui_2048_input::{handle_key_event, is_interrupt, should_quit};
use tui_2048_term::{FrameBuffer, GridView, TerminalRenderer};
use tui_2048_types::{GameAction, POLL_INTERVAL_MS};

/// Process exit status after an interrupt: the signal number itself
/// (SIGINT = 2), reported directly rather than via the 128+N shell
/// convention.
const INTERRUPT_EXIT_CODE: i32 = 2;

/// Session failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A second session tried to open while one was running.
    #[error("another session is already running")]
    ConcurrentSession,
}

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Terminated,
}

/// External conditions the input loop reacts to, alongside keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Terminal was resized; repaint everything.
    RedrawRequested,
    /// Interrupt; tear down the terminal and exit the process.
    ShutdownRequested,
}

static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Holds the process-wide active-session slot while alive.
struct ActiveSlot;

impl ActiveSlot {
    fn try_acquire() -> Option<Self> {
        if ACTIVE.swap(true, Ordering::Acquire) {
            None
        } else {
            Some(Self)
        }
    }
}

impl Drop for ActiveSlot {
    fn drop(&mut self) {
        ACTIVE.store(false, Ordering::Release);
    }
}

/// Translate a terminal event into an external session event, if it is
/// one. Key events that are ordinary input return `None`.
fn external_event(ev: &Event) -> Option<SessionEvent> {
    match ev {
        Event::Resize(_, _) => Some(SessionEvent::RedrawRequested),
        Event::Key(key) if is_interrupt(*key) => Some(SessionEvent::ShutdownRequested),
        _ => None,
    }
}

/// One interactive game session.
pub struct Session {
    grid: Grid,
    view: GridView,
    frame: FrameBuffer,
    state: SessionState,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            view: GridView,
            frame: FrameBuffer::new(0, 0),
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Take over the terminal and run the input loop until quit.
    ///
    /// Fails with [`SessionError::ConcurrentSession`] if another session
    /// is already running. The terminal is restored and the active slot
    /// released on every exit path, including errors from the loop.
    pub fn open(&mut self) -> Result<()> {
        let _slot = ActiveSlot::try_acquire().ok_or(SessionError::ConcurrentSession)?;
        self.state = SessionState::Running;

        let mut term = TerminalRenderer::new();
        term.enter()?;

        let result = self.run(&mut term);

        // Always try to restore the terminal, even when the loop failed.
        let _ = term.exit();
        self.state = SessionState::Terminated;
        result
    }

    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        self.draw(term, true)?;

        loop {
            if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                continue;
            }
            let ev = event::read()?;

            if let Some(external) = external_event(&ev) {
                match external {
                    SessionEvent::RedrawRequested => self.draw(term, true)?,
                    SessionEvent::ShutdownRequested => {
                        let _ = term.exit();
                        process::exit(INTERRUPT_EXIT_CODE);
                    }
                }
                continue;
            }

            let Event::Key(key) = ev else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }

            match handle_key_event(key) {
                Some(GameAction::Restart) => {
                    self.grid.reset()?;
                    self.draw(term, true)?;
                }
                Some(GameAction::Shift(dir)) => {
                    if self.grid.shift(dir) {
                        match self.grid.insert_random_cell() {
                            Ok(_) => {}
                            // The move freed no cell; the board just
                            // stays without a new tile.
                            Err(GridError::NoEmptyCell) => {}
                            Err(err) => return Err(err.into()),
                        }
                    }
                    self.draw(term, false)?;
                }
                None => {}
            }
        }
    }

    fn draw(&mut self, term: &mut TerminalRenderer, full: bool) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.frame.resize(w, h);
        self.view.render_into(&self.grid, &mut self.frame);
        if full {
            term.invalidate();
        }
        term.draw_swap(&mut self.frame)
    }
}

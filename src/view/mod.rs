//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod format;
mod help;
pub mod layout;
mod list;
pub mod rows;
pub mod status;
mod styles;
pub mod tabs;

pub use help::render_help_overlay;
pub use layout::{list_viewport_height, render_layout, AppLayout};
pub use list::render_list;
pub use rows::ItemRow;
pub use styles::{ColorConfig, Palette};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{
    handle_count_action, handle_item_action, handle_list_click, handle_mouse_click,
    handle_mouse_scroll, handle_scroll_action, handle_tab_action, AppState,
};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// How long to wait for an input event before polling again.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Quit,
    Redraw,
    Idle,
}

impl Flow {
    fn redraw_if(changed: bool) -> Self {
        if changed {
            Self::Redraw
        } else {
            Self::Idle
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    palette: Palette,
    /// Last rendered layout (for mouse click detection)
    last_layout: Option<AppLayout>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(app_state: AppState, palette: Palette) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, app_state, palette))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Redraws only after events that changed
    /// what is on screen.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            let flow = match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => Flow::Idle,
            };

            match flow {
                Flow::Quit => return Ok(()),
                Flow::Redraw => self.draw()?,
                Flow::Idle => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    fn with_terminal(terminal: Terminal<B>, mut app_state: AppState, palette: Palette) -> Self {
        if let Ok(size) = terminal.size() {
            app_state.set_viewport_height(list_viewport_height(Rect::new(
                0,
                0,
                size.width,
                size.height,
            )));
        }

        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            palette,
            last_layout: None,
        }
    }

    /// Handle a single keyboard event
    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        // Repeat and release events would double every keystroke on some terminals.
        if key.kind != KeyEventKind::Press {
            return Flow::Idle;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return Flow::Redraw;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return Flow::Idle;
        };

        // The help overlay swallows everything except closing it or quitting.
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return Flow::Idle;
        }

        let changed = match action {
            KeyAction::Quit => return Flow::Quit,
            KeyAction::Help => {
                self.app_state.help_visible = !self.app_state.help_visible;
                true
            }
            KeyAction::NextTab | KeyAction::PrevTab | KeyAction::SelectTab(_) => {
                handle_tab_action(&mut self.app_state, action)
            }
            KeyAction::IncreaseCount | KeyAction::DecreaseCount => {
                handle_count_action(&mut self.app_state, action)
            }
            action if action.is_scroll() => handle_scroll_action(&mut self.app_state, action),
            action if action.is_item() => handle_item_action(&mut self.app_state, action),
            _ => false,
        };

        Flow::redraw_if(changed)
    }

    /// Handle a single mouse event
    ///
    /// Wheel events scroll the active list; a left click on the tab bar
    /// switches tabs and one on a product row selects it. Ignored while the
    /// help overlay is open.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow {
        if self.app_state.help_visible {
            return Flow::Idle;
        }

        let changed = match mouse.kind {
            MouseEventKind::ScrollUp => handle_mouse_scroll(&mut self.app_state, true),
            MouseEventKind::ScrollDown => handle_mouse_scroll(&mut self.app_state, false),
            MouseEventKind::Down(MouseButton::Left) => self.last_layout.is_some_and(|layout| {
                let (x, y) = (mouse.column, mouse.row);
                handle_mouse_click(&mut self.app_state, x, y, layout.tabs)
                    || handle_list_click(&mut self.app_state, x, y, layout.list)
            }),
            _ => false,
        };

        Flow::redraw_if(changed)
    }

    /// Handle a terminal resize event
    ///
    /// Every list gets the new viewport height. The screen is always
    /// repainted since the old frame no longer fits.
    fn handle_resize(&mut self, width: u16, height: u16) -> Flow {
        debug!(width, height, "Terminal resized");
        self.app_state
            .set_viewport_height(list_viewport_height(Rect::new(0, 0, width, height)));
        Flow::Redraw
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            app_state,
            palette,
            ..
        } = self;

        let mut drawn = None;
        terminal.draw(|frame| {
            drawn = Some(render_layout(frame, app_state, palette));
        })?;

        self.last_layout = drawn;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self::with_terminal(
            terminal,
            app_state,
            Palette::new(ColorConfig::from_env_and_args(true)),
        )
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when setup or the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(app_state: AppState, palette: Palette) -> Result<(), TuiError> {
    info!("Starting TUI");
    let result = TuiApp::new(app_state, palette).and_then(|mut app| app.run());

    restore_terminal()?;
    info!("TUI stopped");

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

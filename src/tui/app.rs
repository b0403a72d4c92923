use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::io::config_io::read_config;
use crate::io::{discover_tracks, metadata_path, save_metadata};
use crate::model::{EditField, Phase, Task, Track};
use crate::ops::track_ops::{cycle_value, visible_tracks};

use super::input;
use super::render;
use super::theme::Theme;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How often the track list is reloaded from disk
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(2);

/// Which screen a stack frame shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Tracks,
    Phases,
    Tasks,
    Detail,
    Edit,
    Quit,
}

/// One frame of the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub kind: ScreenKind,
    pub cursor: usize,
    /// Scroll offset (Detail only)
    pub scroll: usize,
    /// Index into the visible track list
    pub track_idx: usize,
    pub phase_idx: usize,
    pub task_idx: usize,
    /// Selected field (Edit only)
    pub field: usize,
    /// Whether the selected field is being edited (Edit only)
    pub editing: bool,
}

impl Screen {
    pub const fn new(kind: ScreenKind) -> Self {
        Screen {
            kind,
            cursor: 0,
            scroll: 0,
            track_idx: 0,
            phase_idx: 0,
            task_idx: 0,
            field: 0,
            editing: false,
        }
    }
}

const ROOT_SCREEN: Screen = Screen::new(ScreenKind::Tracks);

/// Main application state
pub struct App {
    pub base_path: PathBuf,
    /// Every discovered track, active and archived, in display order
    pub tracks: Vec<Track>,
    pub show_archived: bool,
    /// Navigation history; the last frame is the current screen
    pub stack: Vec<Screen>,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(base_path: PathBuf, tracks: Vec<Track>, theme: Theme) -> Self {
        App {
            base_path,
            tracks,
            show_archived: false,
            stack: vec![ROOT_SCREEN],
            theme,
            should_quit: false,
        }
    }

    /// The current (top-of-stack) screen
    pub fn screen(&self) -> &Screen {
        self.stack.last().unwrap_or(&ROOT_SCREEN)
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        if self.stack.is_empty() {
            self.stack.push(ROOT_SCREEN);
        }
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    /// Tracks shown on the Tracks screen, honoring the archive toggle
    pub fn visible_tracks(&self) -> Vec<&Track> {
        visible_tracks(&self.tracks, self.show_archived)
    }

    pub fn track_at(&self, track_idx: usize) -> Option<&Track> {
        self.visible_tracks().get(track_idx).copied()
    }

    pub fn phase_at(&self, track_idx: usize, phase_idx: usize) -> Option<&Phase> {
        self.track_at(track_idx)?.phases.get(phase_idx)
    }

    pub fn task_at(&self, track_idx: usize, phase_idx: usize, task_idx: usize) -> Option<&Task> {
        self.phase_at(track_idx, phase_idx)?.tasks.get(task_idx)
    }

    /// Number of selectable items on a screen. Stale indices count as zero.
    pub fn item_count(&self, screen: &Screen) -> usize {
        match screen.kind {
            ScreenKind::Tracks => self.visible_tracks().len(),
            ScreenKind::Phases => self
                .track_at(screen.track_idx)
                .map_or(0, |t| t.phases.len()),
            ScreenKind::Tasks => self
                .phase_at(screen.track_idx, screen.phase_idx)
                .map_or(0, |p| p.tasks.len()),
            ScreenKind::Detail => self
                .task_at(screen.track_idx, screen.phase_idx, screen.task_idx)
                .map_or(0, |t| t.subtasks.len()),
            ScreenKind::Edit => EditField::ALL.len(),
            ScreenKind::Quit => 0,
        }
    }

    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Pop the current screen; from the last one, ask to quit instead
    pub fn go_back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            self.push(Screen::new(ScreenKind::Quit));
        }
    }

    /// Move the cursor, clamped to the current screen's items
    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.item_count(self.screen());
        let screen = self.screen_mut();
        screen.cursor = clamp_step(screen.cursor, delta, count);
    }

    /// Move the Detail scroll offset. Only the lower bound is enforced here.
    pub fn move_scroll(&mut self, delta: isize) {
        let screen = self.screen_mut();
        screen.scroll = screen.scroll.saturating_add_signed(delta);
    }

    pub fn move_field(&mut self, delta: isize) {
        let screen = self.screen_mut();
        screen.field = clamp_step(screen.field, delta, EditField::ALL.len());
    }

    pub fn toggle_archived(&mut self) {
        self.show_archived = !self.show_archived;
        self.stack = vec![ROOT_SCREEN];
    }

    /// Cycle the selected Edit field of the current track and save it.
    ///
    /// Save failures are logged and otherwise ignored; the next refresh
    /// shows whatever is on disk.
    pub fn cycle_field(&mut self, delta: isize) {
        let screen = self.screen().clone();
        let Some(field) = EditField::from_index(screen.field) else {
            return;
        };
        let Some((track_id, source)) = self
            .track_at(screen.track_idx)
            .map(|t| (t.track_id.clone(), t.source))
        else {
            return;
        };
        let Some(track) = self
            .tracks
            .iter_mut()
            .find(|t| t.track_id == track_id && t.source == source)
        else {
            return;
        };

        let next = cycle_value(field.values(), field.get(track), delta);
        field.set(track, next);
        debug!(track_id = %track.track_id, field = field.label(), value = next, "cycled field");

        let path = metadata_path(&self.base_path, track);
        match save_metadata(&path, track) {
            Ok(now) => track.updated_at = Some(now),
            Err(e) => warn!(track_id = %track.track_id, error = %e, "metadata save failed"),
        }
    }

    /// Reload every track from disk and clamp cursors to the new lists
    pub fn refresh(&mut self) {
        self.tracks = discover_tracks(&self.base_path);
        let counts: Vec<usize> = self.stack.iter().map(|s| self.item_count(s)).collect();
        for (screen, count) in self.stack.iter_mut().zip(counts) {
            screen.cursor = screen.cursor.min(count.saturating_sub(1));
        }
    }
}

fn clamp_step(current: usize, delta: isize, count: usize) -> usize {
    current
        .saturating_add_signed(delta)
        .min(count.saturating_sub(1))
}

/// Run the TUI rooted at `base_path`
pub fn run(base_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!(base = %base_path.display(), "starting");

    let theme = match read_config(base_path) {
        Ok(config) => Theme::from_config(&config.ui),
        Err(e) => {
            warn!(error = %e, "using default theme");
            Theme::default()
        }
    };
    let tracks = discover_tracks(base_path);
    let mut app = App::new(base_path.to_path_buf(), tracks, theme);

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = restore_on_err(setup_terminal(), restore_terminal)?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Best-effort undo of raw mode and the alternate screen
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run `restore` when `result` is an error, passing `result` through
fn restore_on_err<T, E>(result: Result<T, E>, restore: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        restore();
    }
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_refresh = Instant::now();
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Resize events only need the redraw above
        let timeout = REFRESH_INTERVAL.saturating_sub(last_refresh.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }

        if last_refresh.elapsed() >= REFRESH_INTERVAL {
            app.refresh();
            last_refresh = Instant::now();
        }
    }
    Ok(())
}

//! Main TUI application state and control loop

use crate::config::VisualizerConfig;
use crate::list::{errors::ListError, generate_values, ListModel};
use crate::sort::{Algorithm, SortOrder, SortSession};
use crate::ui::render::{Present, Renderer};
use crate::ui::surface::Surface;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Instant;
use tracing::{debug, error, info};

/// A user action decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    Start,
    Ascending,
    Descending,
    Insertion,
    Bubble,
    Quit,
}

impl Command {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
            KeyCode::Char(' ') => Some(Command::Start),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Ascending),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Descending),
            KeyCode::Char('i') | KeyCode::Char('I') => Some(Command::Insertion),
            KeyCode::Char('b') | KeyCode::Char('B') => Some(Command::Bubble),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }

    /// Commands that change the sort configuration and are ignored mid-sort
    pub fn is_configuration(self) -> bool {
        matches!(
            self,
            Command::Ascending | Command::Descending | Command::Insertion | Command::Bubble
        )
    }
}

/// The main application state
pub struct App {
    config: VisualizerConfig,
    renderer: Renderer,
    surface: Surface,
    list: ListModel,

    /// Selection used by the next sort run
    algorithm: Algorithm,
    order: SortOrder,

    /// Active run; `Some` exactly while sorting
    session: Option<SortSession>,

    rng: StdRng,

    /// Header must be repainted before the next chart-only redraw
    needs_full_redraw: bool,

    should_quit: bool,
}

impl App {
    /// Create the app with a freshly generated list, drawing onto `area`
    pub fn new(config: VisualizerConfig, area: Rect) -> Result<Self, ListError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let values = generate_values(config.count, config.min_value, config.max_value, &mut rng)?;
        let list = ListModel::new(config.geometry, values)?;
        info!(
            count = config.count,
            min = config.min_value,
            max = config.max_value,
            "Generated starting list"
        );

        Ok(App {
            renderer: Renderer::new(&config),
            surface: Surface::new(config.geometry, area),
            config,
            list,
            algorithm: Algorithm::default(),
            order: SortOrder::default(),
            session: None,
            rng,
            needs_full_redraw: true,
            should_quit: false,
        })
    }

    /// Run the TUI application until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let frame_interval = self.config.frame_interval();

        while !self.should_quit {
            let frame_start = Instant::now();
            self.tick(terminal)?;

            // Handle input for the rest of the frame budget
            loop {
                let timeout = frame_interval.saturating_sub(frame_start.elapsed());
                if !event::poll(timeout)? {
                    break;
                }
                self.handle_event(event::read()?);
                if self.should_quit {
                    break;
                }
            }
        }

        Ok(())
    }

    /// One frame of work: a sort step with a chart redraw, or a full frame
    pub fn tick<P: Present>(&mut self, presenter: &mut P) -> io::Result<()> {
        let Some(session) = self.session.as_mut() else {
            self.renderer
                .render_frame(&mut self.surface, &self.list, self.algorithm, self.order);
            self.needs_full_redraw = false;
            return presenter.present(&self.surface);
        };

        let step = session.step(self.list.values_mut());
        if step.done {
            info!(
                algorithm = %session.algorithm(),
                order = %session.order(),
                steps = session.steps(),
                "Sort finished"
            );
            self.session = None;
            return Ok(());
        }

        if self.needs_full_redraw {
            self.renderer
                .render_frame(&mut self.surface, &self.list, self.algorithm, self.order);
            self.needs_full_redraw = false;
        }
        self.renderer
            .render_chart(&mut self.surface, &self.list, step.highlight, presenter)
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(command) = Command::from_key(key) {
                    self.apply(command);
                }
            }
            Event::Resize(width, height) => {
                if self.surface.resize(Rect::new(0, 0, width, height)) {
                    debug!(width, height, "Terminal resized");
                    self.needs_full_redraw = true;
                }
            }
            _ => {}
        }
    }

    /// Apply a decoded command to the state machine
    pub fn apply(&mut self, command: Command) {
        if command.is_configuration() && self.is_sorting() {
            debug!(?command, "Ignoring configuration change while sorting");
            return;
        }

        match command {
            Command::Quit => {
                self.should_quit = true;
            }
            Command::Reset => {
                if let Err(e) = self.reset() {
                    error!(%e, "Failed to reset list");
                }
            }
            Command::Start => {
                if self.is_sorting() {
                    debug!("Sort already running");
                    return;
                }
                info!(algorithm = %self.algorithm, order = %self.order, "Sort started");
                self.session = Some(SortSession::new(self.algorithm, self.order));
            }
            Command::Ascending => self.set_order(SortOrder::Ascending),
            Command::Descending => self.set_order(SortOrder::Descending),
            Command::Insertion => self.set_algorithm(Algorithm::Insertion),
            Command::Bubble => self.set_algorithm(Algorithm::Bubble),
        }
    }

    /// Replace the list with fresh random values and stop any running sort
    pub fn reset(&mut self) -> Result<(), ListError> {
        let values = generate_values(
            self.config.count,
            self.config.min_value,
            self.config.max_value,
            &mut self.rng,
        )?;
        self.list.replace(values)?;
        if let Some(session) = self.session.take() {
            info!(steps = session.steps(), "Sort abandoned by reset");
        }
        self.needs_full_redraw = true;
        info!(count = self.list.len(), "List reset");
        Ok(())
    }

    fn set_order(&mut self, order: SortOrder) {
        debug!(%order, "Order selected");
        self.order = order;
    }

    fn set_algorithm(&mut self, algorithm: Algorithm) {
        debug!(%algorithm, "Algorithm selected");
        self.algorithm = algorithm;
    }

    pub fn is_sorting(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SortSession> {
        self.session.as_ref()
    }

    pub fn list(&self) -> &ListModel {
        &self.list
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

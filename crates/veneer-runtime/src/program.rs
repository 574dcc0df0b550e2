#![forbid(unsafe_code)]

//! Elm-style update/view loop.
//!
//! The program runtime separates state ([`Model`]) from rendering and
//! funnels side effects through the [`Cmd`] value returned by each
//! update. One full pass is: read an event, convert it to the model's
//! message type, `update`, execute the returned command, `view` into a
//! frame, present.

use std::io;
use std::time::{Duration, Instant};

use veneer_core::event::Event;
use veneer_core::terminal::{SessionOptions, TerminalSession};
use veneer_render::ansi::Presenter;
use veneer_render::frame::Frame;

/// Application state and behavior.
///
/// # Example
///
/// ```ignore
/// struct Counter {
///     count: i32,
/// }
///
/// enum Msg {
///     Key(KeyEvent),
///     Other,
/// }
///
/// impl From<Event> for Msg {
///     fn from(event: Event) -> Self {
///         match event.as_key_press() {
///             Some(key) => Msg::Key(key),
///             None => Msg::Other,
///         }
///     }
/// }
///
/// impl Model for Counter {
///     type Message = Msg;
///
///     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
///         match msg {
///             Msg::Key(k) if k.is_char('q') => Cmd::quit(),
///             Msg::Key(k) if k.is_char('+') => {
///                 self.count += 1;
///                 Cmd::none()
///             }
///             _ => Cmd::none(),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         // draw the counter
///     }
/// }
/// ```
pub trait Model: Sized {
    /// The message type driving state transitions. Must be convertible
    /// from terminal events.
    type Message: From<Event>;

    /// Startup hook, called once before the first frame.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// The state transition function.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state.
    fn view(&self, frame: &mut Frame);
}

/// Side effects returned from [`Model::init`] and [`Model::update`].
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Quit the application.
    Quit,
    /// Feed a message back into the model.
    Msg(M),
    /// Execute several commands in order.
    Batch(Vec<Cmd<M>>),
    /// Deliver an [`Event::Tick`] after the duration elapses. A new
    /// tick replaces any pending one.
    Tick(Duration),
}

impl<M> Cmd<M> {
    /// No-op command.
    #[must_use]
    pub fn none() -> Self {
        Cmd::None
    }

    /// Quit command.
    #[must_use]
    pub fn quit() -> Self {
        Cmd::Quit
    }

    /// Feed a message back into the model.
    #[must_use]
    pub fn msg(msg: M) -> Self {
        Cmd::Msg(msg)
    }

    /// Run several commands in order.
    #[must_use]
    pub fn batch(cmds: Vec<Cmd<M>>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Schedule a tick.
    #[must_use]
    pub fn tick(after: Duration) -> Self {
        Cmd::Tick(after)
    }
}

impl<M> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cmd::None => write!(f, "None"),
            Cmd::Quit => write!(f, "Quit"),
            Cmd::Msg(_) => write!(f, "Msg(..)"),
            Cmd::Batch(cmds) => write!(f, "Batch(len={})", cmds.len()),
            Cmd::Tick(d) => write!(f, "Tick({d:?})"),
        }
    }
}

/// Program configuration.
#[derive(Debug, Clone, Copy)]
pub struct ProgramConfig {
    /// Terminal features to enable for the session.
    pub session: SessionOptions,
    /// Longest the loop blocks waiting for input before re-checking
    /// the tick deadline.
    pub poll_interval: Duration,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            session: SessionOptions::fullscreen(),
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// The terminal event/render loop over a [`Model`].
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
}

impl<M: Model> Program<M> {
    /// Create a program with the default (fullscreen) configuration.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            config: ProgramConfig::default(),
        }
    }

    /// Builder: override the configuration.
    #[must_use]
    pub fn config(mut self, config: ProgramConfig) -> Self {
        self.config = config;
        self
    }

    /// Run until the model returns [`Cmd::Quit`].
    ///
    /// # Errors
    ///
    /// Propagates terminal setup and IO failures. The terminal is
    /// restored on every exit path, including panic unwind.
    pub fn run(mut self) -> io::Result<M> {
        let session = TerminalSession::new(self.config.session)?;
        let (width, height) = session.size()?;
        let mut frame = Frame::new(width, height);
        let mut presenter = Presenter::new(io::stdout());
        presenter.clear_screen()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(width, height, "program started");

        let mut loop_state = LoopState::new();
        let init_cmd = self.model.init();
        loop_state.apply(&mut self.model, init_cmd);

        while loop_state.running {
            frame.clear();
            self.model.view(&mut frame);
            presenter.present(&frame)?;

            let timeout = loop_state.poll_timeout(self.config.poll_interval);
            if session.poll_event(timeout)? {
                if let Some(event) = session.read_event()? {
                    if let Event::Resize { width, height } = event {
                        frame.resize(width, height);
                        presenter.clear_screen()?;
                    }
                    let cmd = self.model.update(M::Message::from(event));
                    loop_state.apply(&mut self.model, cmd);
                }
            }
            if loop_state.take_due_tick() {
                let cmd = self.model.update(M::Message::from(Event::Tick));
                loop_state.apply(&mut self.model, cmd);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("program stopped");
        drop(session);
        Ok(self.model)
    }
}

/// Loop bookkeeping shared between the live program and the simulator.
pub(crate) struct LoopState {
    pub(crate) running: bool,
    tick_due: Option<Instant>,
}

impl LoopState {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            tick_due: None,
        }
    }

    /// Execute a command tree, recursing into batches.
    pub(crate) fn apply<M: Model>(&mut self, model: &mut M, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(msg) => {
                let next = model.update(msg);
                self.apply(model, next);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    if !self.running {
                        break;
                    }
                    self.apply(model, cmd);
                }
            }
            Cmd::Tick(after) => self.tick_due = Some(Instant::now() + after),
        }
    }

    fn poll_timeout(&self, default: Duration) -> Duration {
        match self.tick_due {
            Some(due) => due.saturating_duration_since(Instant::now()).min(default),
            None => default,
        }
    }

    fn take_due_tick(&mut self) -> bool {
        if self.tick_due.is_some_and(|due| Instant::now() >= due) {
            self.tick_due = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        count: i32,
    }

    enum Msg {
        Add(i32),
        Quit,
        Ignore,
    }

    impl From<Event> for Msg {
        fn from(event: Event) -> Self {
            match event.as_key_press() {
                Some(key) if key.is_char('+') => Msg::Add(1),
                Some(key) if key.is_char('q') => Msg::Quit,
                _ => Msg::Ignore,
            }
        }
    }

    impl Model for Counter {
        type Message = Msg;

        fn update(&mut self, msg: Msg) -> Cmd<Msg> {
            match msg {
                Msg::Add(n) => {
                    self.count += n;
                    Cmd::none()
                }
                Msg::Quit => Cmd::quit(),
                Msg::Ignore => Cmd::none(),
            }
        }

        fn view(&self, _frame: &mut Frame) {}
    }

    #[test]
    fn apply_msg_recurses_through_update() {
        let mut model = Counter { count: 0 };
        let mut state = LoopState::new();
        state.apply(&mut model, Cmd::msg(Msg::Add(3)));
        assert_eq!(model.count, 3);
        assert!(state.running);
    }

    #[test]
    fn apply_batch_stops_after_quit() {
        let mut model = Counter { count: 0 };
        let mut state = LoopState::new();
        state.apply(
            &mut model,
            Cmd::batch(vec![Cmd::msg(Msg::Add(1)), Cmd::quit(), Cmd::msg(Msg::Add(1))]),
        );
        assert_eq!(model.count, 1);
        assert!(!state.running);
    }

    #[test]
    fn tick_becomes_due_after_deadline() {
        let mut model = Counter { count: 0 };
        let mut state = LoopState::new();
        state.apply(&mut model, Cmd::tick(Duration::ZERO));
        assert!(state.take_due_tick());
        assert!(!state.take_due_tick());
    }
}

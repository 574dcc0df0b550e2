#![forbid(unsafe_code)]

//! Deterministic headless driver for [`Model`] testing.
//!
//! Runs the update/view loop without a terminal: events are injected,
//! frames captured into plain buffers, and every executed command is
//! recorded. Ticks fire immediately instead of after their duration,
//! keeping simulation time-free.

use veneer_core::event::Event;
use veneer_render::buffer::Buffer;
use veneer_render::frame::Frame;

use crate::program::{Cmd, Model};

use std::time::Duration;

/// Record of a command executed during simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdRecord {
    None,
    Quit,
    Msg,
    Batch(usize),
    Tick(Duration),
}

/// Headless simulator over a [`Model`].
pub struct ProgramSimulator<M: Model> {
    model: M,
    command_log: Vec<CmdRecord>,
    frames: Vec<Buffer>,
    running: bool,
}

impl<M: Model> ProgramSimulator<M> {
    /// Wrap a model. Call [`init`](Self::init) before injecting events.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            command_log: Vec::new(),
            frames: Vec::new(),
            running: true,
        }
    }

    /// Run `Model::init` and execute its commands.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.execute(cmd);
    }

    /// Inject events. Each is converted via `From<Event>` and dispatched
    /// through `update`; injection stops once the model quits.
    pub fn inject_events(&mut self, events: &[Event]) {
        for event in events {
            if !self.running {
                break;
            }
            let cmd = self.model.update(M::Message::from(event.clone()));
            self.execute(cmd);
        }
    }

    /// Inject a single event.
    pub fn inject_event(&mut self, event: Event) {
        self.inject_events(std::slice::from_ref(&event));
    }

    /// Send a message directly, bypassing event conversion.
    pub fn send(&mut self, msg: M::Message) {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        self.execute(cmd);
    }

    /// Render the current state at the given size, keeping and
    /// returning the captured buffer.
    pub fn capture_frame(&mut self, width: u16, height: u16) -> &Buffer {
        let mut frame = Frame::new(width, height);
        self.model.view(&mut frame);
        self.frames.push(frame.buffer);
        &self.frames[self.frames.len() - 1]
    }

    /// Whether the simulated program is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the wrapped model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Every command executed so far, in order.
    pub fn command_log(&self) -> &[CmdRecord] {
        &self.command_log
    }

    /// All captured frame buffers.
    pub fn frames(&self) -> &[Buffer] {
        &self.frames
    }

    fn execute(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => self.command_log.push(CmdRecord::None),
            Cmd::Quit => {
                self.command_log.push(CmdRecord::Quit);
                self.running = false;
            }
            Cmd::Msg(msg) => {
                self.command_log.push(CmdRecord::Msg);
                let next = self.model.update(msg);
                self.execute(next);
            }
            Cmd::Batch(cmds) => {
                self.command_log.push(CmdRecord::Batch(cmds.len()));
                for cmd in cmds {
                    if !self.running {
                        break;
                    }
                    self.execute(cmd);
                }
            }
            // Fire immediately so tests stay time-free.
            Cmd::Tick(after) => {
                self.command_log.push(CmdRecord::Tick(after));
                let next = self.model.update(M::Message::from(Event::Tick));
                self.execute(next);
            }
        }
    }
}

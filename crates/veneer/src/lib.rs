#![forbid(unsafe_code)]

//! Veneer public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use veneer_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use veneer_core::geometry::{Rect, Sides};
pub use veneer_core::terminal::{SessionOptions, TerminalSession};

// --- Render re-exports -----------------------------------------------------

pub use veneer_render::ansi::Presenter;
pub use veneer_render::buffer::Buffer;
pub use veneer_render::cell::{Cell, PackedRgba, StyleFlags};
pub use veneer_render::frame::Frame;

// --- Style re-exports ------------------------------------------------------

pub use veneer_style::{Style, Theme, ThemeMode};

// --- Widget re-exports -----------------------------------------------------

pub use veneer_widgets::alert::{Alert, AlertSeverity};
pub use veneer_widgets::badge::{Badge, BadgeVariant};
pub use veneer_widgets::button::{Button, ButtonVariant};
pub use veneer_widgets::combobox::{Combobox, ComboboxEvent, ComboboxOption, ComboboxState};
pub use veneer_widgets::command::{CommandList, CommandOutcome, CommandState};
pub use veneer_widgets::popover::{Popover, PopoverState};
pub use veneer_widgets::toast::{Toast, ToastId, ToastSeverity, ToastStack};
pub use veneer_widgets::{StatefulWidget, Widget};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use veneer_runtime::{Cmd, Model, Program, ProgramConfig, ProgramSimulator};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Veneer apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure during terminal operations.
    Io(std::io::Error),
    /// Terminal or runtime error with message.
    Terminal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Terminal(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for Veneer APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Buffer, Error, Event, Frame, KeyCode, KeyEvent, Modifiers, Rect, Result, StatefulWidget,
        Style, TerminalSession, Theme, Widget,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{Cmd, Model, Program};

    pub use crate::{core, render, style, widgets};
}

pub use veneer_core as core;
pub use veneer_render as render;
#[cfg(feature = "runtime")]
pub use veneer_runtime as runtime;
pub use veneer_style as style;
pub use veneer_widgets as widgets;

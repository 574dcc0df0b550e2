#![forbid(unsafe_code)]

//! Terminal lifecycle, input events, and geometry for Veneer.
//!
//! This crate holds the substrate every other Veneer crate builds on:
//! [`geometry::Rect`] for layout bounds, [`event`] for canonical input
//! types, and [`terminal::TerminalSession`] for raw-mode lifecycle with
//! guaranteed restore-on-drop.

pub mod event;
pub mod geometry;
pub mod terminal;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use geometry::{Rect, Sides};
pub use terminal::{SessionOptions, TerminalSession};

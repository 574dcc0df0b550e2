#![forbid(unsafe_code)]

//! Cell grid, frame, and ANSI presentation for Veneer.
//!
//! The model is deliberately small: a [`cell::Cell`] is one terminal
//! cell (char + colors + attributes), a [`buffer::Buffer`] is a
//! row-major grid of cells, a [`frame::Frame`] is the per-render target
//! widgets draw into, and [`ansi::Presenter`] turns a finished frame
//! into escape sequences on any `io::Write`.

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod frame;

pub use ansi::Presenter;
pub use buffer::Buffer;
pub use cell::{Cell, PackedRgba, StyleFlags};
pub use frame::Frame;

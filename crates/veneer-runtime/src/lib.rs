#![forbid(unsafe_code)]

//! Veneer runtime.
//!
//! Ties the core and render crates into an application loop:
//!
//! - [`Model`] - application state and behavior
//! - [`Cmd`] - side effects returned from updates
//! - [`Program`] - the terminal event/render loop
//! - [`ProgramSimulator`] - deterministic headless driver for tests
//!
//! The runtime consumes input events from `veneer-core`, drives
//! `Model::update`, and renders `Model::view` output through the
//! `veneer-render` presenter.

pub mod program;
pub mod simulator;

pub use program::{Cmd, Model, Program, ProgramConfig};
pub use simulator::{CmdRecord, ProgramSimulator};

#![forbid(unsafe_code)]

//! Interactive catalog of Veneer components.
//!
//! One screen per component family, cycled with Tab or jumped to by
//! number. The toast overlay is global so every screen can raise
//! notifications.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod screens;

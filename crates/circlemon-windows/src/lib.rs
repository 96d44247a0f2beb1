//! Win32 implementation of the circlemon widget.
//!
//! Everything in this crate talks to the OS directly through the
//! `windows` crate and is only compiled on Windows.
#![cfg(windows)]

/// CPU and memory counters behind [`circlemon_core::UsageSource`].
pub mod counters;

/// Task Manager launch with an error dialog on failure.
pub mod launch;

/// Monitor work-area lookup.
pub mod monitor;

/// The widget window, its timer, and the message loop.
pub mod widget;

mod menu;
mod render;
mod text;
mod tray;

pub use counters::SystemCounters;
pub use widget::run;

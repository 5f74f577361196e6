//! Diagnostics for the junk typing race: segment dumps, one-off judging,
//! scripted match replays and settings validation.

pub mod commands;
pub mod render;
pub mod replay;
pub mod trace_init;

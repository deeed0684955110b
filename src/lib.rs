//! Space garbage (workspace facade crate).
//!
//! An animated ASCII space scene for the terminal: a ship dodging (and, from
//! 2020 on, shooting) orbital debris under a twinkling sky. The implementation
//! lives in dedicated crates under `crates/`; this package re-exports them as
//! `space_garbage::{core,engine,input,term,types}` and adds the outer shell:
//! asset loading, logging and the [`run`] entry point.

pub use space_garbage_core as core;
pub use space_garbage_engine as engine;
pub use space_garbage_input as input;
pub use space_garbage_term as term;
pub use space_garbage_types as types;

pub mod assets;
pub mod logging;

mod app;

pub use app::{run, LaunchOptions};

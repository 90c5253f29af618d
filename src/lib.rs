//! Stacking tic-tac-toe: a 3x3 board where larger pieces cover smaller ones,
//! and an alpha-beta engine that plays or advises.

pub mod alpha_beta_searcher;
pub mod board;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generator;
pub mod stack_search;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;

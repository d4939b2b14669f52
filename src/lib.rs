//! Classic grid snake: a synchronous, deterministic simulation core wrapped
//! in a ratatui terminal front end.

pub mod board;
pub mod config;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

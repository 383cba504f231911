pub mod cli;
pub mod collation;
pub mod commands;
pub mod config;
pub mod geo;
pub mod logging;
pub mod mvi;
pub mod picker;
pub mod ui;

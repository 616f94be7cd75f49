pub mod app;
pub mod calendar;
pub mod chrome;
pub mod cli;
pub mod components;
pub mod drivers;
pub mod event_loop;
pub mod keybindings;
pub mod tasks;
pub mod theme;
pub mod tracing_sub;
pub mod ui;

//! Terminal dashboard: eight pages over the mounted views.

pub mod app;
pub mod components;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod pages;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

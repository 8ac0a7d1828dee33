pub mod api;
pub mod config;
pub mod export;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod notify;
pub mod refresh;
pub mod ui;
pub mod view;

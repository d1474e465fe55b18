pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod scene;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;

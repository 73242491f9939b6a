//! Navigation bar with an animated dropdown menu, built on Dioxus.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod timer;
pub mod transition;
pub mod types;

pub use app::App;
pub use config::{NavbarConfig, TransitionConfig};
pub use error::{NavError, NavResult};

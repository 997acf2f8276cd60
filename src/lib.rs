pub mod chant;
pub mod config;
pub mod error;
pub mod mala;
pub mod web;

mod app;
mod components;
mod utils;

pub use app::App;

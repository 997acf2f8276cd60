pub mod controls;
pub mod mala;
pub mod settings;

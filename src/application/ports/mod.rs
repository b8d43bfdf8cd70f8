// src/application/ports/mod.rs
pub mod locale;
pub mod random;
pub mod time;

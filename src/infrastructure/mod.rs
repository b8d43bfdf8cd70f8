pub mod database;
pub mod locale;
pub mod random;
pub mod repositories;
pub mod time;

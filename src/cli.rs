pub mod command;
pub mod display;
pub mod run;

pub use run::run_app;

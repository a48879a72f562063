//! Full-screen terminal front end: sidebar navigation and the prediction form

pub mod app;
mod draw;
pub mod form;
mod layout;
pub mod run;
mod theme;
mod widgets;

pub use app::App;
pub use run::run;

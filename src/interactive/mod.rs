pub mod app;
pub mod rendering;

pub use app::{App, InputMode, Tab, run_tui};

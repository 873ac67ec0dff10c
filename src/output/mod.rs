//! Terminal output after the TUI has been torn down

mod display;

pub use display::print_session_summary;

pub mod colors;
pub mod spinner;

pub use colors::*;
pub use spinner::Spinner;

use std::io::IsTerminal;

/// Whether console output should be colored (stdout is a terminal)
pub fn should_color() -> bool {
    std::io::stdout().is_terminal()
}

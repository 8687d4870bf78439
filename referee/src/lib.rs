mod console;
mod session;
pub use console::*;
pub use session::*;

/// Values given on the command line. Missing or invalid values are asked for
/// interactively.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    pub size: Option<usize>,
    pub win_length: Option<usize>,
}

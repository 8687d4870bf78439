pub use board::*;
pub use errors::*;
pub use game::*;
pub use lines::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod game;
mod lines;
mod visualization;

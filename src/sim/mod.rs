pub mod console;
pub mod schedule;
pub mod simulator;

pub use console::*;
pub use schedule::*;
pub use simulator::*;

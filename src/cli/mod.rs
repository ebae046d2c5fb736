pub mod commands;

pub use commands::{Cli, Commands, render_command, run};

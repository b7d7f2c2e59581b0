//! Terminal presentation: narration lines and console prompts

pub mod console;
pub mod narration;

pub use console::{ConsoleNarrator, ConsolePrompt};
pub use narration::{narrate, Line, Tone};

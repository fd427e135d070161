//! CLI test harness.
//!
//! Each `TestEnv` owns a temp directory holding the database and XDG
//! config/data roots, so tests never touch the user's notes.

mod command;
mod env;
mod note;

#[allow(unused_imports)]
pub use command::NotepadCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use note::TestNote;

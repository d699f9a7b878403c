//! Terminal front-end for the contact form.
//!
//! Renders the form on a line-oriented terminal, turns typed lines into
//! [`Command`]s and shows notifications that wait for the user to acknowledge them.

pub mod command;
pub mod console;
pub mod terminal;

pub use command::Command;
pub use console::Console;
pub use terminal::{render_form, Acknowledgements, FormScreen, TerminalNotifier};

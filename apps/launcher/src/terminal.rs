use std::io::{self, Write};

use client_core::OutputRegion;

/// Terminal stand-in for the page's output box. Status and errors go to
/// stderr so stdout only ever carries program output.
#[derive(Debug, Default)]
pub struct TerminalRegion;

impl OutputRegion for TerminalRegion {
    fn write_status(&self, text: &str) {
        let mut err = io::stderr().lock();
        let _ = write!(err, "{text}");
        let _ = err.flush();
    }

    fn write_result(&self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = write!(out, "{text}");
        let _ = out.flush();
    }

    fn write_error(&self, text: &str) {
        let _ = writeln!(io::stderr().lock(), "{text}");
    }
}

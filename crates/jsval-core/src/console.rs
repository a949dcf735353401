//! Line printing over an explicit sink.
//!
//! A [`Console`] owns the writer it prints to, so output can go to stdout,
//! a file, or a `Vec<u8>` in tests without any process-wide state.

use std::fmt;
use std::io::{self, Write};

use crate::error::Result;

/// Writes rendered values, one line per [`Console::log`] call.
#[derive(Debug)]
pub struct Console<W: Write> {
    sink: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Console::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(sink: W) -> Self {
        Console { sink }
    }

    /// Render each argument in order with no separator, then end the line.
    ///
    /// ```
    /// use jsval_core::{Console, Number, Variant};
    ///
    /// let mut console = Console::new(Vec::new());
    /// console.log(&[&"n = ", &Number::from(2), &Variant::Absence]).unwrap();
    /// assert_eq!(console.into_inner(), b"n = 2undefined\n");
    /// ```
    pub fn log(&mut self, args: &[&dyn fmt::Display]) -> Result<()> {
        for arg in args {
            write!(self.sink, "{arg}")?;
        }
        writeln!(self.sink)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Print any number of displayable values on one line of a [`Console`].
///
/// ```
/// use jsval_core::{console_log, Console, Flag};
///
/// let mut console = Console::new(Vec::new());
/// console_log!(console, "ok: ", Flag(true)).unwrap();
/// assert_eq!(console.into_inner(), b"ok: true\n");
/// ```
#[macro_export]
macro_rules! console_log {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $console.log(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

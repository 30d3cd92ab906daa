use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use crate::interpreter::value::Value;

/// A single reported problem, rendered as `line:message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: i32,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: i32, message: String) -> Diagnostic {
        Diagnostic { line, message }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.message)
    }
}

/// Output sink shared by program output and diagnostics, so that runtime
/// errors show up in between the values printed around them.
///
/// Write failures don't interrupt the run; the first one is kept and handed
/// back by [`Console::finish`].
pub struct Console<'out> {
    file_name: Option<String>,
    out: &'out mut dyn Write,
    failure: Option<io::Error>,
}

impl<'out> Console<'out> {
    pub fn new(file_name: Option<String>, out: &'out mut dyn Write) -> Console<'out> {
        Console { file_name, out, failure: None }
    }

    pub fn report(&mut self, diagnostic: &Diagnostic) {
        let result = match &self.file_name {
            Some(file_name) => writeln!(self.out, "{}:{}", file_name, diagnostic),
            None => writeln!(self.out, "{}", diagnostic),
        };

        self.record(result);
    }

    pub fn error_at(&mut self, line: i32, message: &str) {
        self.report(&Diagnostic::new(line, message.to_owned()));
    }

    pub fn print(&mut self, value: &Value, newline: bool) {
        let result = if newline {
            writeln!(self.out, "{}", value)
        } else {
            write!(self.out, "{}", value)
        };

        self.record(result);
    }

    pub fn finish(mut self) -> io::Result<()> {
        let result = self.out.flush();
        self.record(result);

        match self.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            if self.failure.is_none() {
                self.failure = Some(err);
            }
        }
    }
}

pub mod util;
pub mod interpreter;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use clap::Parser as ClapParser;
use thiserror::Error;
use tracing::{debug, info, Level};
use crate::interpreter::checker::SemanticChecker;
use crate::interpreter::console::Console;
use crate::interpreter::environment::Environment;
use crate::interpreter::evaluator::Evaluator;
use crate::interpreter::lexer::Lexer;
use crate::interpreter::parser::Parser;

#[derive(ClapParser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    #[clap(help = "Program to run; read from standard input if omitted")]
    pub input: Option<PathBuf>,

    #[clap(long, help = "Print the token stream instead of running the program")]
    pub tokens: bool,
    #[clap(short, long, help = "Print verbose log output")]
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{name} FILE NOT FOUND")]
    FileNotFound {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The syntax error has already been reported on the console.
    #[error("program could not be parsed")]
    Parse,
}

/// How far a parsed program got.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every statement ran.
    Completed,
    /// A runtime error stopped the remaining statements.
    Aborted,
    /// Semantic errors were reported; nothing was evaluated.
    Rejected,
}

/// Runs programs against one [`Environment`].
///
/// The name tables are never reset, so an interpreter is meant for a
/// single program; running a second one sees the first one's declarations.
#[derive(Debug, Default)]
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter::default()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn run(&mut self, source: &str, console: &mut Console) -> Result<Outcome, Error> {
        let mut parser = Parser::new(Lexer::new(source), console);
        let tree = parser.parse();

        let tree = match tree {
            Some(tree) if !parser.had_error() => tree,
            _ => return Err(Error::Parse),
        };

        let mut checker = SemanticChecker::new(&mut self.environment.types, console);
        checker.check(&tree);

        if !checker.is_error_free() {
            info!(errors = checker.errors().len(), "semantic check failed, skipping evaluation");
            return Ok(Outcome::Rejected);
        }

        let result = Evaluator::new(&mut self.environment.values, console).evaluate(&tree);
        debug!(?result, "evaluated program");

        Ok(if result.is_empty() { Outcome::Completed } else { Outcome::Aborted })
    }
}

/// Parses, checks and evaluates `source` in a fresh environment.
pub fn run_source(source: &str, console: &mut Console) -> Result<Outcome, Error> {
    Interpreter::new().run(source, console)
}

pub fn run() -> Result<(), Error> {
    let config: Config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_config(&config, &mut out)
}

/// Reads the program named by `config` and either dumps its tokens or runs
/// it, writing everything to `out`.
///
/// Semantic and runtime errors have already been reported on `out` and
/// still count as a successful run; only a syntax error or an unreadable
/// input is an `Err`.
pub fn run_config(config: &Config, out: &mut dyn Write) -> Result<(), Error> {
    let (source, file_name) = read_source(config)?;
    debug!(file = ?file_name, bytes = source.len(), "read program");

    if config.tokens {
        for token in Lexer::new(&source) {
            writeln!(out, "{}", token)?;
        }

        return Ok(());
    }

    let mut console = Console::new(file_name, out);
    let result = run_source(&source, &mut console);
    console.finish()?;

    let outcome = result?;
    debug!(?outcome, "finished");

    Ok(())
}

/// Returns the program text and, when it came from a file, the file name
/// used to prefix diagnostics.
pub fn read_source(config: &Config) -> Result<(String, Option<String>), Error> {
    let mut source = String::new();

    match &config.input {
        Some(path) => {
            let name = path.to_string_lossy().into_owned();

            let mut file = match File::open(path) {
                Ok(file) => file,
                Err(err) => return Err(Error::FileNotFound { name, source: err }),
            };

            file.read_to_string(&mut source)?;
            Ok((source, Some(name)))
        },
        None => {
            io::stdin().read_to_string(&mut source)?;
            Ok((source, None))
        },
    }
}

//! Employee information chat CLI.
//!
//! # Responsibility
//! - Wire the record-store service to a terminal read-eval loop.
//! - Degrade to defaults instead of failing at startup where possible
//!   (missing greetings file, missing storage file, broken logging).

use crate::greetings::Greetings;
use staffbook_core::{default_log_level, init_logging, EmployeeService, SqliteTableStore};
use std::io;
use std::process::ExitCode;

mod greetings;
mod repl;

const DEFAULT_DB_FILE: &str = "employees.db";
const GREETINGS_FILE: &str = "greetings.txt";

fn main() -> ExitCode {
    init_file_logging();

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_FILE.to_string());

    let store = match SqliteTableStore::open(&db_path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Cannot open employee storage `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut service = match EmployeeService::load(store) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Cannot load employee table from `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let greetings = Greetings::load(GREETINGS_FILE);
    println!("Welcome to the Employee Information System!");
    println!("{}", greetings.welcome());

    let stdin = io::stdin();
    let stdout = io::stdout();
    match repl::run(&mut service, &greetings, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Terminal i/o failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Best-effort logging bootstrap; the chat loop works without it.
fn init_file_logging() {
    let Ok(cwd) = std::env::current_dir() else {
        return;
    };
    let log_dir = cwd.join("logs");
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), log_dir) {
        eprintln!("File logging disabled: {err}");
    }
}

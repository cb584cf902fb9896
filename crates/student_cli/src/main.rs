//! Student records shell entry point.
//!
//! # Responsibility
//! - Parse process flags and start optional file logging.
//! - Wire registry -> repository -> service -> shell explicitly.

mod shell;

use clap::Parser;
use log::info;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use student_core::{
    default_log_level, init_logging, FaultPolicy, InMemoryStudentRepository, LoggingObserver,
    ObserverRegistry, StudentService,
};

#[derive(Parser, Debug)]
#[command(name = "student_records", version = student_core::core_version())]
#[command(about = "In-memory student records shell", long_about = None)]
struct Cli {
    /// Log level: trace|debug|info|warn|error
    #[arg(long, default_value = default_log_level())]
    log_level: String,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,

    /// Log observer failures and keep notifying instead of reporting them
    #[arg(long)]
    isolate_observer_faults: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(message) = init_logging(&cli.log_level, log_dir) {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    }

    let policy = if cli.isolate_observer_faults {
        FaultPolicy::Isolate
    } else {
        FaultPolicy::Propagate
    };
    let mut observers = ObserverRegistry::with_policy(policy);
    observers.subscribe(Arc::new(LoggingObserver::new()));
    let mut service = StudentService::new(InMemoryStudentRepository::with_observers(observers));

    info!("event=shell_start module=cli status=ok policy={policy:?}");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match shell::run(&mut service, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

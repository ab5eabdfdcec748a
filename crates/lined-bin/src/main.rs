//! Lined entrypoint.
use anyhow::Result;
use clap::Parser;
use core_actions::io_ops::open_file;
use core_actions::repl::{self, LoopExit};
use core_actions::{HELP_TEXT, Session};
use core_config::load_from;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "lined.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "lined", version, about = "Line-oriented text editor")]
struct Args {
    /// Optional file to load at startup. If omitted the buffer starts empty.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `lined.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn run(&mut self, args: &Args) -> Result<Session> {
        self.configure_logging()?;
        Self::install_panic_hook();
        info!(target: "runtime", "startup");

        let config = load_from(args.config.clone())?;
        let mut session = Session::from_config(&config);
        if let Some(path) = args.path.as_deref() {
            Self::open_initial(&mut session, path);
        }
        Ok(session)
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    // A missing or unreadable startup file is reported; the session still starts.
    fn open_initial(session: &mut Session, path: &Path) {
        match open_file(&mut session.state, path) {
            Ok(summary) => {
                println!(
                    "Read {} lines from {}",
                    summary.lines,
                    summary.path.display()
                );
                if summary.lossy {
                    println!("(invalid UTF-8 replaced)");
                }
                if summary.mixed_line_endings {
                    println!("(mixed line endings; saving as {:?})", summary.line_ending);
                }
            }
            Err(e) => {
                warn!(target: "io", file = %path.display(), error = %format!("{e:#}"), "startup_open_failed");
                println!("{e:#}");
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    let mut session = startup.run(&args)?;

    println!("{HELP_TEXT}");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let exit = repl::run(&mut session, stdin.lock(), &mut stdout)?;
    stdout.flush()?;
    if exit == LoopExit::EndOfInput && session.state.dirty {
        warn!(target: "runtime", "exit_with_unsaved_changes");
    }
    info!(target: "runtime", ?exit, "shutdown");
    Ok(())
}

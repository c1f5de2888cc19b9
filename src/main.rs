use gopherdoc::cli::{Args, Command};
use std::process;

fn main() {
    let args = Args::parse_args();
    init_logging(&args);

    let command = Command::from_args(args);
    let exit_code = command.run();

    if exit_code > 0 {
        log::debug!("Exiting with code {}", exit_code);
    }
    process::exit(exit_code);
}

/// Log to stderr; `RUST_LOG` overrides the level picked from the flags
fn init_logging(args: &Args) {
    let level = if args.quiet {
        "error"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

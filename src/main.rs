use std::io;
use std::process;

use clap::Parser;
use contacts::config::{Limits, DEFAULT_MAX_NAME_LEN, DEFAULT_MAX_PHONE_LEN};
use contacts::menu;
use contacts::tree::ContactTree;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Interactive contact book kept in a binary search tree
#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Longest name kept, in bytes. Longer input is cut.
    #[arg(long, default_value_t = DEFAULT_MAX_NAME_LEN)]
    max_name_len: usize,

    /// Longest phone number kept, in bytes. Longer input is cut.
    #[arg(long, default_value_t = DEFAULT_MAX_PHONE_LEN)]
    max_phone_len: usize,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let limits = Limits {
        max_name_len: cli.max_name_len,
        max_phone_len: cli.max_phone_len,
    };
    tracing::debug!(?limits, "starting contact book");

    let mut tree = ContactTree::new();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    if let Err(e) = menu::run(&mut tree, &mut input, &mut output, &limits) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -d. Logs go to stderr so the menu owns stdout.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

use clap::Parser;
use referee::{run, Config, Console};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Two players take turns on an N x N board; the first to get K marks in a
/// row, column or diagonal wins.
#[derive(Parser)]
struct Args {
    /// Side length of the board. Asked for interactively if missing or invalid
    #[arg(short, long)]
    size: Option<usize>,

    /// How many marks in a row are needed to win. Asked for interactively if missing or invalid
    #[arg(short, long)]
    win_length: Option<usize>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = Config {
        size: args.size,
        win_length: args.win_length,
    };
    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());
    run(&mut console, &config)?;

    Ok(())
}

// The game talks to the players on stdout, so logs go to stderr.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

use std::path::PathBuf;

use anyhow::Context;
use blackboard::{init_logging, Board, Config, Interpreter, BUILD_DATE, VERSION};
use clap::Parser;

#[derive(Parser)]
#[command(name = "blackboard")]
#[command(about = "Interactive ASCII blackboard for drawing figures on a character canvas")]
#[command(version)]
struct Cli {
    /// Config file (.toml or .json); defaults to the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Canvas height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Design file to load at startup
    #[arg(long)]
    load: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Do not print the welcome banner
    #[arg(long, default_value_t = false)]
    no_banner: bool,

    /// Draw the board after every change
    #[arg(long, default_value_t = false)]
    auto_draw: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.no_banner {
        config.ui.show_banner = false;
    }
    if cli.auto_draw {
        config.ui.auto_draw = true;
    }
    config.validate().context("Invalid configuration")?;

    init_logging(&config.logging.level)?;
    tracing::info!(
        "Blackboard {} ({}) with a {}x{} canvas",
        VERSION,
        BUILD_DATE,
        config.board.width,
        config.board.height
    );

    let mut board = Board::new(config.board.width, config.board.height);
    if let Some(path) = &cli.load {
        board
            .load_from_file(path)
            .with_context(|| format!("Failed to load design {}", path.display()))?;
    }

    if config.ui.show_banner {
        println!(
            "Welcome to Blackboard {}. Type 'help' to see available commands.",
            VERSION
        );
    }

    let stdout = std::io::stdout();
    let mut interpreter =
        Interpreter::new(board, stdout.lock()).with_auto_draw(config.ui.auto_draw);

    let stdin = std::io::stdin();
    interpreter.run(stdin.lock(), &config.ui.prompt)?;

    Ok(())
}

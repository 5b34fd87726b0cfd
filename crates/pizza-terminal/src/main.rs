// crates/pizza-terminal/src/main.rs

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pizza_core::OrderDesk;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pizza_terminal::app::App;
use pizza_terminal::config::AppConfig;
use pizza_terminal::script::{run_script, write_orders_json};
use pizza_terminal::ui;

#[derive(Parser)]
#[clap(name = "pizza-terminal")]
#[clap(about = "Pizza order form and pending order list")]
struct Cli {
    /// TOML config file (falls back to $PIZZA_CONFIG, then built-in defaults)
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Replay a command script instead of opening the form ("-" reads stdin)
    #[clap(short, long)]
    script: Option<PathBuf>,

    /// After a script run, print the pending orders as JSON
    #[clap(long, requires = "script")]
    json: bool,

    /// Log file for interactive mode (the form owns the terminal)
    #[clap(long, default_value = "pizza-terminal.log")]
    log_file: PathBuf,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match &cli.script {
        Some(path) => run_script_mode(path, cli.json),
        None => {
            let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
            run_interactive(config)
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let default_level = if cli.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    if cli.script.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        let file = File::create(&cli.log_file)
            .with_context(|| format!("creating log file {}", cli.log_file.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn run_script_mode(path: &Path, print_json: bool) -> Result<()> {
    let mut desk = OrderDesk::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = if path == Path::new("-") {
        run_script(io::stdin().lock(), &mut out, &mut desk)?
    } else {
        let file = File::open(path)
            .with_context(|| format!("opening script {}", path.display()))?;
        run_script(BufReader::new(file), &mut out, &mut desk)?
    };

    info!(
        commands = summary.commands,
        skipped = summary.skipped,
        pending = desk.store().len(),
        "script finished"
    );

    if print_json {
        write_orders_json(&desk, &mut out)?;
    }
    Ok(())
}

fn run_interactive(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let app = App::new(config);
    info!(
        toppings = app.toppings.len(),
        addons = app.addons.len(),
        "order form ready"
    );
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "order form exited with an error");
    }
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            info!(pending = app.desk.store().len(), "order form closed");
            return Ok(());
        }
    }
}

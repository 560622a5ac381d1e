use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use leanvision::app::{App, Page, StatusLevel};
use leanvision::config::{self, Config};
use leanvision::domain::Catalog;
use leanvision::logging;
use leanvision::modules::export::{self, Format};
use leanvision::ui;

#[derive(Debug, Parser)]
#[command(
    name = "leanvision",
    version,
    about = "LeanVision: compliance dashboard in the terminal"
)]
struct Args {
    /// Page to open first (overrides `start_page`)
    #[arg(long, value_enum)]
    page: Option<Page>,

    /// Config file (default: ~/.config/leanvision/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Draw one page and print it
    Render {
        #[arg(value_enum)]
        page: Page,

        #[arg(long, default_value_t = 120)]
        width: u16,

        #[arg(long, default_value_t = 48)]
        height: u16,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_err) = match config::load(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let catalog = Catalog::builtin().context("build dashboard content")?;

    // `render` writes to stdout only and never opens the log file
    if let Some(Command::Render {
        page,
        width,
        height,
        format,
    }) = args.command
    {
        if let Some(err) = &config_err {
            eprintln!("{err}");
        }
        let output = match format {
            Format::Text => export::render_text(page, &catalog, config.layouts, width, height),
            Format::Json => export::render_json(page, &catalog, config.layouts)
                .context("serialize page snapshot")?,
        };
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            writeln!(stdout)?;
        }
        return Ok(());
    }

    let log_err = logging::init(&config.log).err();
    if let Some(err) = &config_err {
        warn!(error = %err, "config rejected, using defaults");
    }

    let page = args.page.unwrap_or(config.start_page);
    info!(page = page.route(), "starting dashboard");

    let mut app = App::new(catalog, config.layouts, page);
    if let Some(err) = log_err {
        app.set_status(format!("Логирование отключено: {err:#}"), StatusLevel::Warn);
    }
    if let Some(err) = config_err {
        app.set_status(format!("Конфигурация: {err}"), StatusLevel::Error);
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, config.tick_rate());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            info!("quit");
            return Ok(());
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }
}

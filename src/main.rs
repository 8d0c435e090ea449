use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use projdash::app::App;
use projdash::config::{self, Config};
use projdash::{input, logging, ui};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartPage {
    Home,
    Tree,
}

#[derive(Debug, Parser)]
#[command(
    name = "projdash",
    version,
    about = "projdash: a terminal project dashboard with a collapsible project tree"
)]
struct Args {
    /// Page to open first (overrides the config file)
    #[arg(long, value_enum)]
    page: Option<StartPage>,

    /// Start with the sidebar collapsed
    #[arg(long)]
    collapsed: bool,

    /// Config file (default: $PROJDASH_CONFIG or ~/.config/projdash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (default: <data dir>/projdash.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the flattened tree to stdout and exit
    #[arg(long)]
    print_tree: bool,

    /// Start with every tree row expanded
    #[arg(long)]
    expand_all: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout mode stays quiet unless a log file was asked for
    if !args.print_tree || args.log_file.is_some() {
        if let Err(err) = logging::init(args.log_file.as_deref()) {
            eprintln!("logging disabled: {err:#}");
        }
    }

    let config = config::load(args.config.as_deref());
    let mut app = App::new(&config_with_args(config, &args));
    if args.expand_all {
        app.tree.expand_all();
    }

    if args.print_tree {
        return print_tree(&app);
    }

    log::info!("starting on {}", app.page.title());

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("{err:?}");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn config_with_args(mut config: Config, args: &Args) -> Config {
    if let Some(page) = args.page {
        config.start_page = match page {
            StartPage::Home => config::StartPage::Home,
            StartPage::Tree => config::StartPage::Tree,
        };
    }
    if args.collapsed {
        config.sidebar_open = false;
    }
    config
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            log::info!("quit");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let size = terminal_rect().unwrap_or_default();
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key, size),
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse, size),
                Event::Resize(width, height) => {
                    log::debug!("resize {width}x{height}");
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn print_tree(app: &App) -> Result<()> {
    let page = &app.tree;
    let mut out = io::stdout().lock();
    for row in page.rows() {
        let indent = page.indent_table().cells_for(&row, page.indent_unit()) as usize;
        let marker = match (row.has_children, page.is_expanded(&row.id)) {
            (false, _) => ' ',
            (true, true) => '-',
            (true, false) => '+',
        };
        writeln!(
            out,
            "{:<10} {}{} {}  [{}] {} .. {}",
            row.id.as_str(),
            " ".repeat(indent),
            marker,
            row.node.name,
            row.node.level,
            row.node.start_date,
            row.node.end_date
        )?;
    }
    Ok(())
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}

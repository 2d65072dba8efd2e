//! Deptview - a terminal browser for department datasets.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use deptview::app::{App, HELP};
use deptview::config::{BrowserConfig, DEFAULT_PAGE_SIZE, DEFAULT_READ_MORE_THRESHOLD};
use deptview::data::DataReader;
use deptview::table::{Action, SortDirection, SortState, YearFilter};
use deptview::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "deptview")]
#[command(about = "A terminal browser for department datasets", long_about = None)]
struct Args {
    /// JSON records, a category map, or a site manifest
    file: PathBuf,

    /// Route of the page to open
    #[arg(long)]
    page: Option<String>,

    /// Category key to select on the opened page
    #[arg(long)]
    category: Option<String>,

    /// Rows per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Characters above which long text gets "Read More"
    #[arg(long, default_value_t = DEFAULT_READ_MORE_THRESHOLD)]
    read_more_threshold: usize,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the page as plain text and exit
    #[arg(long)]
    print: bool,

    /// Search term (with --print)
    #[arg(long, requires = "print")]
    search: Option<String>,

    /// Year filter (with --print)
    #[arg(long, requires = "print")]
    year: Option<String>,

    /// Sort column, optionally suffixed with `:desc` (with --print)
    #[arg(long, requires = "print")]
    sort: Option<String>,

    /// 1-indexed page to print (with --print)
    #[arg(long, requires = "print")]
    page_number: Option<usize>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        tracing::info!("Starting Deptview");
    }

    let site = DataReader::read_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let config = BrowserConfig::default()
        .with_page_size(args.page_size)
        .with_read_more_threshold(args.read_more_threshold);
    let mut app = App::new(site, config);

    if let Some(route) = &args.page {
        app.open_route(route)?;
    }
    if let Some(key) = &args.category {
        app.select_category(key)?;
    }

    if args.print {
        apply_print_query(&mut app, &args);
        print!("{}", ui::render_page(&app.table.view()));
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Deptview exited");
    }

    Ok(())
}

/// Apply the `--print` filters in pipeline order: sort, year, search, page.
fn apply_print_query(app: &mut App, args: &Args) {
    if let Some(spec) = &args.sort {
        let sort = SortState::parse(spec);
        app.dispatch(Action::ToggleSort(sort.key.clone()));
        if sort.direction == SortDirection::Descending {
            app.dispatch(Action::FlipSort);
        }
    }
    if let Some(year) = &args.year {
        app.dispatch(Action::SetYear(YearFilter::parse(year)));
    }
    if let Some(term) = &args.search {
        app.dispatch(Action::SetSearch(term.clone()));
    }
    if let Some(page) = args.page_number {
        app.dispatch(Action::GotoPage(page));
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        // Read-more modal - handle separately
        if app.table.read_more.is_open() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                    app.dispatch(Action::CloseReadMore);
                },
                KeyCode::Down | KeyCode::Char('j') => app.table.read_more.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.table.read_more.scroll_up(),
                KeyCode::Char('c') => app.copy_selection(),
                _ => {},
            }
            continue;
        }

        // Search mode - handle separately
        if app.search.is_active() {
            match key.code {
                KeyCode::Enter => app.submit_search(),
                KeyCode::Esc => app.cancel_search(),
                KeyCode::Backspace => app.search_backspace(),
                KeyCode::Char(c) => app.search_input(c),
                _ => {},
            }
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

            // Rows
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.dispatch(Action::CursorUp);
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.dispatch(Action::CursorDown);
            },

            // Pages
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                app.dispatch(Action::PrevPage);
            },
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                app.dispatch(Action::NextPage);
            },
            (KeyModifiers::NONE, KeyCode::Char('g')) => app.dispatch(Action::FirstPage),
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => app.dispatch(Action::LastPage),

            // Filters
            (KeyModifiers::NONE, KeyCode::Char('/')) => app.start_search(),
            (KeyModifiers::NONE, KeyCode::Char('y')) => {
                app.dispatch(Action::CycleYear { forward: true });
                app.report_year();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('Y')) => {
                app.dispatch(Action::CycleYear { forward: false });
                app.report_year();
            },

            // Categories
            (KeyModifiers::NONE, KeyCode::Tab) => {
                app.dispatch(Action::CycleCategory { forward: true });
            },
            (_, KeyCode::BackTab) => {
                app.dispatch(Action::CycleCategory { forward: false });
            },
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
                if let Some(digit) = c.to_digit(10) {
                    app.dispatch(Action::SelectCategoryIndex(digit as usize - 1));
                }
            },

            // Sorting
            (KeyModifiers::NONE, KeyCode::Char('s')) => {
                app.dispatch(Action::CycleSort);
                app.report_sort();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('S')) => {
                app.dispatch(Action::FlipSort);
                app.report_sort();
            },

            // Columns and long text
            (KeyModifiers::NONE, KeyCode::Char('e')) => {
                app.dispatch(Action::ToggleExpanded);
                app.status = if app.table.is_expanded() {
                    "Showing all columns".to_string()
                } else {
                    "Showing fewer columns".to_string()
                };
            },
            (KeyModifiers::NONE, KeyCode::Enter) => {
                app.dispatch(Action::OpenReadMore);
                if !app.table.read_more.is_open() {
                    app.status = "Nothing more to read on this row".to_string();
                }
            },

            // Routes
            (KeyModifiers::NONE, KeyCode::Char(']')) => app.next_route(),
            (KeyModifiers::NONE, KeyCode::Char('[')) => app.prev_route(),

            // Features
            (KeyModifiers::NONE, KeyCode::Char('c')) => app.copy_selection(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (_, KeyCode::Char('?')) => app.status = format!("Help: {}", HELP),

            _ => {},
        }
    }
}

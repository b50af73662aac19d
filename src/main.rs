//! Sirocco - a terminal-based CSV viewer and plotter.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sirocco::app::{App, Focus};
use sirocco::ui;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "sirocco")]
#[command(about = "A terminal-based CSV viewer and plotter", long_about = None)]
struct Args {
    /// Directory to browse (or a CSV file to open directly)
    path: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Sirocco");
    }

    // Validate path if provided
    if let Some(ref path) = args.path {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.path);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Sirocco exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Form mode - typed characters edit the active field
                if app.focus == Focus::Form {
                    match (key.modifiers, key.code) {
                        // Back to the browser
                        (KeyModifiers::NONE, KeyCode::Esc) => {
                            app.show_tree = true;
                            app.focus = Focus::Browser;
                        }

                        // Trigger a plot with the selected backend
                        (KeyModifiers::NONE, KeyCode::Enter) => {
                            app.trigger_plot();
                        }

                        // Backend and plot-region actions
                        (KeyModifiers::CONTROL, KeyCode::Char('t')) => {
                            app.form.cycle_backend();
                            app.status = format!("Backend: {}", app.form.backend.name());
                        }
                        (KeyModifiers::CONTROL, KeyCode::Char('l')) => {
                            app.clear_plot();
                        }

                        // Panel visibility
                        (KeyModifiers::CONTROL, KeyCode::Char('f')) => {
                            app.toggle_tree();
                        }

                        // Field focus cycling
                        (KeyModifiers::NONE, KeyCode::Tab) => {
                            app.form.focus_next();
                        }
                        (_, KeyCode::BackTab) => {
                            app.form.focus_prev();
                        }

                        // Suggestion picking
                        (KeyModifiers::NONE, KeyCode::Down) => {
                            app.form.active_mut().select_next();
                        }
                        (KeyModifiers::NONE, KeyCode::Up) => {
                            app.form.active_mut().select_prev();
                        }

                        // Text editing
                        (KeyModifiers::NONE, KeyCode::Backspace) => {
                            app.form.active_mut().backspace();
                        }
                        (KeyModifiers::NONE, KeyCode::Char(c))
                        | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                            app.form.active_mut().insert(c);
                        }

                        _ => {}
                    }
                    continue;
                }

                // Browser mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Navigation
                    (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.file_browser.cursor_up();
                    }
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.file_browser.cursor_down();
                    }

                    // Select/Open
                    (KeyModifiers::NONE, KeyCode::Enter)
                    | (KeyModifiers::NONE, KeyCode::Char('l'))
                    | (KeyModifiers::NONE, KeyCode::Right) => {
                        app.browser_select();
                    }

                    // Go to parent directory
                    (KeyModifiers::NONE, KeyCode::Char('h'))
                    | (KeyModifiers::NONE, KeyCode::Left) => {
                        app.browser_parent();
                    }

                    // Table scrolling
                    (KeyModifiers::SHIFT, KeyCode::Char('J')) => {
                        app.scroll_table_down();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('K')) => {
                        app.scroll_table_up();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('H')) => {
                        app.scroll_table_left();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('L')) => {
                        app.scroll_table_right();
                    }

                    // Hidden files
                    (KeyModifiers::NONE, KeyCode::Char('.')) => {
                        app.toggle_hidden();
                    }

                    // Panel visibility
                    (KeyModifiers::NONE, KeyCode::Char('f')) => {
                        app.toggle_tree();
                    }

                    // Focus the plot form
                    (KeyModifiers::NONE, KeyCode::Tab) => {
                        app.focus = Focus::Form;
                    }

                    // Plot actions
                    (KeyModifiers::NONE, KeyCode::Char('p')) => {
                        app.trigger_plot();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.clear_plot();
                    }

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    }

                    _ => {}
                }
            }
        }
    }
}

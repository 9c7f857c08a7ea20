use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use typing_clicker::core::constants::{FRAME_INTERVAL_MS, SAVE_FILE_NAME};
use typing_clicker::input::map_key;
use typing_clicker::ui::{activity_log::ActivityLog, draw_ui};
use typing_clicker::utils::build_info;
use typing_clicker::utils::logging::init_file_logging;
use typing_clicker::utils::persistence::{data_dir, restore_or_default, save_best_effort, SaveStore};
use typing_clicker::{GameInput, GameState, SentenceCorpus, SessionController};

/// Typing Clicker - Terminal Idle Typing Game
#[derive(Parser, Debug)]
#[command(name = "typing-clicker", disable_version_flag = true)]
struct Cli {
    /// Save file to load at startup and write on exit
    #[arg(long, value_name = "PATH")]
    save_file: Option<PathBuf>,

    /// JSON list of practice sentences to use instead of the built-in list
    #[arg(long, value_name = "PATH")]
    sentences: Option<PathBuf>,

    /// Start from a new game, ignoring any existing save
    #[arg(long)]
    fresh: bool,

    /// Do not write the save file on exit
    #[arg(long)]
    no_save: bool,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    // Logging and the default save location share the data directory
    let home_data = data_dir().ok();
    if let Some(dir) = &home_data {
        if let Err(e) = init_file_logging(dir) {
            eprintln!("Warning: logging disabled, could not open log in {}: {}", dir.display(), e);
        }
    }
    info!("{} starting", build_info::version_line());

    let corpus = match &cli.sentences {
        Some(path) => SentenceCorpus::from_json_file(path).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("could not load sentences from {}: {}", path.display(), e),
            )
        })?,
        None => SentenceCorpus::builtin(),
    };

    let store = cli
        .save_file
        .clone()
        .or_else(|| home_data.as_ref().map(|dir| dir.join(SAVE_FILE_NAME)))
        .map(SaveStore::new);
    if store.is_none() {
        warn!("no save location available, progress will not persist");
    }

    let state = match (&store, cli.fresh) {
        (Some(store), false) => restore_or_default(store),
        _ => GameState::new(),
    };

    let mut rng = rand::thread_rng();
    let mut controller = SessionController::new(state, corpus, &mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut controller, &mut rng);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let state = controller.into_state();
    match &store {
        Some(store) if !cli.no_save => {
            if !save_best_effort(store, &state) {
                eprintln!("Warning: could not save progress to {}", store.path().display());
            }
        }
        _ => info!("exiting without saving"),
    }
    info!(
        level = state.level,
        currency = state.currency,
        "session ended"
    );

    result
}

/// Frame loop: drain idle time, dispatch input, redraw.
fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut SessionController,
    rng: &mut impl rand::Rng,
) -> io::Result<()> {
    let mut activity = ActivityLog::new();
    let started = Instant::now();
    let mut accounted_ms: u64 = 0;

    loop {
        // Elapsed time is taken from one monotonic origin so sub-millisecond
        // remainders are never dropped between frames
        let total_ms = started.elapsed().as_millis() as u64;
        let events = controller.advance(total_ms - accounted_ms);
        accounted_ms = total_ms;
        activity.record(&events);

        let view = controller.view();
        terminal.draw(|frame| draw_ui(frame, &view, &activity))?;

        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(GameInput::Quit) => break,
                    Some(input) => {
                        let events = controller.apply(input, rng);
                        activity.record(&events);
                    }
                    None => {}
                }
            }
        }
    }

    Ok(())
}

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

use riff::config::{Config, ConfigStore, FileConfigStore};
use riff::games::Week;
use riff::runtime::{CrosstermEventSource, FixedTicker, RiffEvent, Runner};
use riff::{App, TICK_RATE_MS};

/// ten weeks of improv games in your terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// jump straight to a week (1-10)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
    week: Option<u8>,

    /// disable confetti, tones and metronome cues
    #[arg(long)]
    no_effects: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let store = FileConfigStore::new();
    let config = store.load();

    let week = cli
        .week
        .and_then(Week::from_number)
        .or_else(|| Week::from_number(config.last_week))
        .unwrap_or(Week::Week1);
    let effects_enabled = !cli.no_effects && config.effects_enabled;

    let mut app = App::new(week, effects_enabled)?;
    run_tui(&mut app)?;

    store.save(&Config {
        last_week: app.week.number(),
        effects_enabled: app.effects_enabled,
    })?;
    Ok(())
}

fn run_tui(app: &mut App) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(app, &mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop<W: Write>(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<W>>,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    let size = terminal.size()?;
    app.size = (size.width, size.height);

    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        match runner.step() {
            RiffEvent::Tick => app.handle_tick(),
            RiffEvent::Key(key) => {
                if app.handle_key(key) {
                    return Ok(());
                }
            }
            RiffEvent::Mouse(mouse) => app.handle_mouse(mouse),
            RiffEvent::Resize => {
                let size = terminal.size()?;
                app.size = (size.width, size.height);
            }
        }
    }
}

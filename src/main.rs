use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use tuido::app::App;
use tuido::calendar::SystemClock;
use tuido::cli::Cli;
use tuido::drivers::{InputDriver, console::ConsoleDriver};
use tuido::event_loop::{ControlFlow, EventLoop};
use tuido::tasks::Store;
use tuido::theme::Theme;
use tuido::tracing_sub;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let store = Store::open(cli.data_dir.clone()).map_err(io::Error::other)?;
    tracing_sub::init_file(&store.log_path());
    info!(data_dir = %store.data_dir().display(), "starting");

    let dark = cli.dark || store.load_dark_mode();
    let mut app = App::new(store, Theme::new(dark), Box::new(SystemClock));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut driver = ConsoleDriver::new();
    driver.set_mouse_capture(true)?;
    let mut event_loop = EventLoop::new(driver, POLL_INTERVAL);

    let result = event_loop.run(|_, event| match event {
        Some(event) => Ok(app.handle_event(&event)),
        None => {
            terminal.draw(|frame| app.draw(frame))?;
            Ok(ControlFlow::Continue)
        }
    });

    event_loop.driver().set_mouse_capture(false)?;
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    info!("stopped");
    result
}

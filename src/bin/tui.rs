use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};

use tintview::{
    cli::Args,
    decode,
    tui::{self, AppAction, KeyInput, ViewerState},
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let image = decode::open(&args.path)
        .with_context(|| format!("failed to load {}", args.path.display()))?;
    let state = ViewerState::new(args.display_name(), image, &args.config())
        .context("decoded image is inconsistent")?;

    enable_raw_mode().context("enable raw mode")?;
    if let Err(err) = std::io::stdout().execute(EnterAlternateScreen) {
        disable_raw_mode().context("disable raw mode")?;
        return Err(err).context("enter alternate screen");
    }

    let result = run_app(state);

    std::io::stdout()
        .execute(LeaveAlternateScreen)
        .context("leave alternate screen")?;
    disable_raw_mode().context("disable raw mode")?;

    result
}

fn run_app(mut state: ViewerState) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    let poll_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| tui::view(frame, &state))?;

        if !event::poll(poll_rate)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    break;
                }
                if let Some(input) = map_key(key.code) {
                    if state.handle_input(input) == Some(AppAction::Quit) {
                        break;
                    }
                }
            }
            Event::Resize(columns, rows) => debug!("resized to {columns}x{rows}"),
            _ => {}
        }
    }

    Ok(())
}

fn map_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(ch) => Some(KeyInput::Char(ch)),
        KeyCode::Esc => Some(KeyInput::Esc),
        _ => None,
    }
}

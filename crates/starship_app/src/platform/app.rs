use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Context};
use engine_logging::engine_info;
use starship_core::{update, AppState, Msg, SessionState};
use starship_engine::FetchSettings;

use super::effects::EffectRunner;
use super::{logging, render};
use crate::cli::Cli;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(&cli);

    let settings = FetchSettings {
        request_timeout: Duration::from_secs(cli.timeout_secs),
        ..FetchSettings::default()
    };
    let runner = EffectRunner::new(settings, &cli.base_url).context("starting the loader")?;
    let mut app = App {
        state: AppState::new(),
        runner,
        out: io::stdout().lock(),
    };

    if let Some(distance) = &cli.distance {
        app.dispatch(Msg::DistanceChanged(distance.clone()))?;
    }
    app.dispatch(Msg::Start)?;

    let mut retries_left = cli.retries;
    loop {
        match app.state.session() {
            SessionState::Ready => break,
            SessionState::Failed if retries_left > 0 => {
                retries_left -= 1;
                engine_info!("Retrying load, {} retries left after this one", retries_left);
                app.dispatch(Msg::RetryClicked)?;
            }
            SessionState::Failed => bail!("no starships loaded"),
            SessionState::Idle | SessionState::Loading => {
                let msg = app.runner.next_msg(POLL_INTERVAL);
                app.dispatch(msg)?;
            }
        }
    }

    if cli.distance.is_none() {
        app.prompt_distances(io::stdin().lock())?;
    }
    Ok(())
}

struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> App<W> {
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let (next, effects) = update(std::mem::take(&mut self.state), msg);
        self.state = next;
        self.runner.enqueue(effects);
        if self.state.consume_dirty() {
            render::render(&self.state.view(), &mut self.out)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// One distance per line, until EOF or an empty line.
    fn prompt_distances(&mut self, input: impl BufRead) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(self.out, "Distance in MGLT (empty to quit): ")?;
            self.out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                return Ok(());
            };
            if line.trim().is_empty() {
                return Ok(());
            }
            self.dispatch(Msg::DistanceChanged(line))?;
        }
    }
}

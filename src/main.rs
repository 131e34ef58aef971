//! Terminal blockdrop runner.
//!
//! crossterm for input, the framebuffer view for output, a fixed 16ms tick
//! driving gravity.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockdrop::core::{GameController, GameState};
use blockdrop::input::should_quit;
use blockdrop::term::{BellAudio, FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use blockdrop::types::{GameEvent, TICK_MS};
use blockdrop::{BestScore, Config};

fn main() -> Result<()> {
    let config = Config::from_env().context("read BLOCKDROP_* configuration")?;
    init_logging(&config)?;
    log::info!(
        "starting: seed={} randomizer={:?} hold={:?}",
        config.seed,
        config.randomizer,
        config.hold_policy
    );

    let mut term = TerminalRenderer::stdout();
    term.enter()?;

    let result = run(&mut term, &config);

    // Restore the terminal even when the game loop failed.
    if let Err(err) = term.exit() {
        log::warn!("terminal restore failed: {:#}", err);
    }
    if let Err(err) = &result {
        log::error!("{:#}", err);
    }
    result
}

/// Logs go to `BLOCKDROP_LOG_FILE` only; stderr would draw over the game.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut best = BestScore::load_or_default(&config.best_score_path);

    let mut audio = BellAudio::stdout();
    if config.muted {
        audio = audio.muted();
    }
    let state = GameState::with_rules(config.seed, config.rules());
    let mut game = GameController::new(state, audio);
    let bindings = config.key_bindings();

    let view = GameView::default();
    let mut frame = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud {
            best_score: best.get(),
            muted: config.muted,
        };
        view.render_into(game.snapshot(), hud, Viewport::new(w, h), &mut frame);
        term.present(&mut frame)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = bindings.action_for(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        for game_event in game.drain_events() {
            if let GameEvent::GameOver { score } = game_event {
                if let Err(err) = best.submit(score) {
                    log::warn!("could not save best score: {:#}", err);
                }
            }
        }
    }
}

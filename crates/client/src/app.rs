//! Application wiring and the interactive event loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dice_content::{TileSet, TileSetLoader};
use runtime::{
    Event, InputSignal, Runtime, RuntimeConfig, RuntimeHandle, SessionEvent, SurfaceEvent, Topic,
};
use tokio::sync::broadcast::error::RecvError;
use tokio::time;

use crate::config::CliConfig;
use crate::terminal::{self, Tui};
use crate::ui::{self, ViewState};

/// Input poll cadence, one display frame.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    config: CliConfig,
    tiles: TileSet,
}

impl App {
    /// Loads assets up-front: all three sprites must be ready before any
    /// input handling is armed, so a repaint can never hit a missing tile.
    pub fn new(config: CliConfig) -> Result<Self> {
        let tiles = match &config.asset_dir {
            Some(dir) => TileSetLoader::load(dir)?,
            None => TileSetLoader::embedded()?,
        };
        Ok(Self { config, tiles })
    }

    pub async fn run(self) -> Result<()> {
        let (mut tui, enhanced) = terminal::setup()?;
        let result = self.event_loop(&mut tui, enhanced).await;
        terminal::restore(enhanced)?;
        result
    }

    async fn event_loop(&self, tui: &mut Tui, enhanced: bool) -> Result<()> {
        let handle = Runtime::start(RuntimeConfig {
            frame_interval: self.config.frame_interval,
            seed: self.config.seed,
            ..Default::default()
        });
        let mut session_rx = handle.subscribe(Topic::Session);
        let mut surface_rx = handle.subscribe(Topic::Surface);

        // Initial settled paint before the first press.
        handle.send(InputSignal::FullRoll).await?;

        let mut view = ViewState::new();
        let mut input_tick = time::interval(INPUT_POLL_INTERVAL);

        loop {
            tokio::select! {
                incoming = surface_rx.recv() => match incoming {
                    Ok(Event::Surface(SurfaceEvent::Painted { values })) => {
                        view.values = values;
                        self.render(tui, &view)?;
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "dropped surface events");
                    }
                    Err(RecvError::Closed) => break,
                },
                incoming = session_rx.recv() => match incoming {
                    Ok(Event::Session(SessionEvent::Started)) => {
                        view.result.clear();
                        self.render(tui, &view)?;
                    }
                    Ok(Event::Session(SessionEvent::Settled { text })) => {
                        view.result = text;
                        self.render(tui, &view)?;
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "dropped session events");
                    }
                    Err(RecvError::Closed) => break,
                },
                _ = input_tick.tick() => {
                    if self.handle_input(&handle, enhanced, tui, &mut view).await? {
                        break;
                    }
                }
            }
        }

        handle.shutdown().await?;
        Ok(())
    }

    /// Drains pending terminal events; returns true to quit.
    async fn handle_input(
        &self,
        handle: &RuntimeHandle,
        enhanced: bool,
        tui: &mut Tui,
        view: &mut ViewState,
    ) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                TermEvent::Key(key) => {
                    if is_quit(&key) {
                        return Ok(true);
                    }
                    match (key.code, key.kind) {
                        (
                            KeyCode::Char(' ') | KeyCode::Enter,
                            KeyEventKind::Press | KeyEventKind::Repeat,
                        ) => {
                            // Auto-repeat collapses into the running session.
                            if enhanced {
                                handle.send(InputSignal::Start).await?;
                            } else {
                                // No release events available: a tap rolls once.
                                handle.send(InputSignal::FullRoll).await?;
                            }
                        }
                        (KeyCode::Char(' ') | KeyCode::Enter, KeyEventKind::Release) => {
                            handle.send(InputSignal::End).await?;
                        }
                        _ => {}
                    }
                }
                // Looking away settles the roll; focus regain changes nothing.
                TermEvent::FocusLost => handle.send(InputSignal::End).await?,
                TermEvent::Resize(width, height) => {
                    let scale =
                        dice_core::scale_factor(u32::from(width), u32::from(height));
                    tracing::debug!(width, height, scale, "viewport resized");
                    self.render(tui, view)?;
                }
                _ => {}
            }
        }
        Ok(false)
    }

    fn render(&self, tui: &mut Tui, view: &ViewState) -> Result<()> {
        tui.draw(|frame| ui::draw(frame, &self.tiles, view))?;
        Ok(())
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

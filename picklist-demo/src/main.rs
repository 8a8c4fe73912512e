//! Terminal demo for the picklist select.
//!
//! Usage: `picklist-demo [CONFIG.json]`. Logs go to a file because the
//! terminal is in raw mode while the demo runs.

mod app;
mod config;
mod error;
mod input;
mod render;
mod state;
mod terminal;

use std::fs::File;

use crossterm::event::EventStream;
use futures::StreamExt;
use simplelog::{Config, WriteLogger};

use crate::app::{App, Flow};
use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::terminal::Terminal;

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    let config = DemoConfig::from_args()?;

    let log_file = File::create(&config.log_file)?;
    WriteLogger::init(config.level()?, Config::default(), log_file)?;
    log::info!("Starting with {} options", config.options.len());

    let mut app = App::new(&config)?;
    run(&mut app).await?;

    log::info!("Exited cleanly");
    Ok(())
}

async fn run(app: &mut App) -> Result<(), DemoError> {
    let mut term = Terminal::new()?;
    let mut events = EventStream::new();

    term.draw(&app.frame())?;

    // One event at a time, each handled to completion before the next read
    while let Some(event) = events.next().await {
        let event = event?;
        if app.handle(&event) == Flow::Quit {
            break;
        }
        term.draw(&app.frame())?;
    }

    Ok(())
}

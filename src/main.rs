//! # Weather Face Application Entry Point
//!
//! This binary hosts the watch face engine on a single-threaded tokio
//! runtime. A stdin reader plays both the wearable host and the paired
//! companion: JSON lines are published as weather updates, plain words are
//! lifecycle callbacks.
//!
//! ## Commands
//! - `{"minTemp": "12°", "maxTemp": "20°", "weatherId": 500}`: companion push
//!   (an optional `"path"` key overrides the configured data path)
//! - `delete [path]`: companion removes its item
//! - `show` / `hide`, `ambient` / `interactive`, `round` / `square`
//! - `lowbit on|off`, `tz <zone>`, `tick`, `quit`
//!
//! Frames are printed as an ASCII preview of the frame buffer, or as a list
//! of draw calls with `--stdout`.

// Test modules
#[cfg(test)]
mod tests;

use anyhow::{anyhow, bail, Context};
use log::{info, warn};
use serde_json::Value;
use std::env;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};
use weather_face_lib::{
    clock::SystemClock,
    config::Config,
    engine::WatchFaceEngine,
    renderer::{self, FrameBuffer, GraphicsCanvas, RecordingCanvas},
    runtime::{self, FaceEvent},
    sync::{CompanionHandle, DataItem, DataLayer, DataMap, LocalTransport},
};

/// Width of the ASCII frame preview in characters
const PREVIEW_COLUMNS: u32 = 48;

/// Translate one stdin line into an event. Empty lines yield `None`.
fn parse_command(
    line: &str,
    companion: &CompanionHandle,
    data_path: &str,
) -> anyhow::Result<Option<FaceEvent>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if line.starts_with('{') {
        let mut value: Value = serde_json::from_str(line).context("invalid JSON payload")?;
        let path = value
            .as_object_mut()
            .and_then(|map| map.remove("path"))
            .and_then(|path| path.as_str().map(str::to_string))
            .unwrap_or_else(|| data_path.to_string());
        let batch = companion.put(DataItem::new(path, DataMap::from_json(value)))?;
        return Ok(Some(FaceEvent::DataChanged(batch)));
    }

    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let argument = words.next();

    let event = match (command, argument) {
        ("show", None) => FaceEvent::VisibilityChanged(true),
        ("hide", None) => FaceEvent::VisibilityChanged(false),
        ("ambient", None) => FaceEvent::AmbientModeChanged(true),
        ("interactive", None) => FaceEvent::AmbientModeChanged(false),
        ("round", None) => FaceEvent::WindowInsets { is_round: true },
        ("square", None) => FaceEvent::WindowInsets { is_round: false },
        ("lowbit", Some("on")) => FaceEvent::PropertiesChanged {
            low_bit_ambient: true,
        },
        ("lowbit", Some("off")) => FaceEvent::PropertiesChanged {
            low_bit_ambient: false,
        },
        ("tz", Some(zone)) => FaceEvent::TimeZoneChanged(zone.to_string()),
        ("tick", None) => FaceEvent::TimeTick,
        ("delete", path) => {
            return match companion.delete(path.unwrap_or(data_path))? {
                Some(batch) => Ok(Some(FaceEvent::DataChanged(batch))),
                None => {
                    warn!("Nothing stored at {}", path.unwrap_or(data_path));
                    Ok(None)
                }
            };
        }
        ("quit", None) => FaceEvent::Destroy,
        _ => bail!("unknown command: {}", line),
    };
    Ok(Some(event))
}

/// Feed input lines to the face until EOF or `quit`.
async fn read_commands<R>(
    input: R,
    events: UnboundedSender<FaceEvent>,
    companion: CompanionHandle,
    data_path: String,
) where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match parse_command(&line, &companion, &data_path) {
            Ok(Some(event)) => {
                let quit = event == FaceEvent::Destroy;
                if events.send(event).is_err() || quit {
                    return;
                }
            }
            Ok(None) => {}
            Err(e) => warn!("{:#}", e),
        }
    }
    events.send(FaceEvent::Destroy).ok();
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse command line arguments
    // Development mode: list draw calls instead of rendering pixels
    let args: Vec<String> = env::args().collect();
    let development_mode = args.iter().any(|arg| arg == "--stdout");
    let start_round = args.iter().any(|arg| arg == "--round");
    let config = match args.iter().position(|arg| arg == "--config") {
        Some(index) => Config::load_from_path(
            args.get(index + 1)
                .ok_or_else(|| anyhow!("--config needs a path"))?,
        ),
        None => Config::load(),
    };

    // The data layer belongs to the application; the engine only gets the
    // watch-side transport
    let layer = DataLayer::new();
    let companion = CompanionHandle::new(layer.clone());
    let transport = LocalTransport::new(layer);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = rt.block_on(async move {
        let bounds = config.bounds();
        let text_color = config.text_color();
        let data_path = config.sync.path.clone();
        let engine = WatchFaceEngine::create(config, transport, SystemClock);

        let (events, receiver) = mpsc::unbounded_channel();
        events.send(FaceEvent::WindowInsets {
            is_round: start_round,
        })?;
        events.send(FaceEvent::VisibilityChanged(true))?;
        let stdin = BufReader::new(tokio::io::stdin());
        tokio::spawn(read_commands(stdin, events, companion, data_path));

        info!("Watch face running, type `quit` to stop");

        if development_mode {
            let mut canvas = RecordingCanvas::new();
            runtime::run(engine, receiver, &mut canvas, bounds, |snapshot, canvas| {
                println!("-- frame {}", snapshot.time_text());
                for op in &canvas.ops {
                    println!("   {}", op);
                }
                canvas.clear();
            })
            .await;
        } else {
            let mut canvas = GraphicsCanvas::new(FrameBuffer::new(bounds), text_color);
            runtime::run(engine, receiver, &mut canvas, bounds, |snapshot, canvas| {
                println!("-- frame {}", snapshot.time_text());
                print!("{}", renderer::to_ascii(canvas.target(), PREVIEW_COLUMNS));
            })
            .await;
        }

        anyhow::Ok(())
    });

    // A stdin read may still be blocked on the terminal; don't wait for it
    rt.shutdown_background();
    result
}

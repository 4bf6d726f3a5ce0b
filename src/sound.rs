use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink, Source};
use tracing::{debug, info};

pub const TICK_SOUND_FILE: &str = "tick.wav";

/// Ambient ticking, looped until dropped.
pub struct TickSound {
    // the stream must outlive the sink or playback stops
    _stream: OutputStream,
    _sink: Sink,
}

impl TickSound {
    pub fn start(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("failed to decode {}", path.display()))?;

        let (stream, stream_handle) =
            OutputStream::try_default().context("no audio output device")?;
        let sink = Sink::try_new(&stream_handle).context("failed to create audio sink")?;
        sink.append(source.buffered().repeat_infinite());

        Ok(Self {
            _stream: stream,
            _sink: sink,
        })
    }

    /// Looks for the tick sound next to the program and starts it.
    ///
    /// Best effort: every failure is logged and swallowed.
    pub fn try_start_default() -> Option<Self> {
        let candidates = default_candidates();
        let Some(path) = locate(&candidates) else {
            debug!(?candidates, "tick sound not found, running silent");
            return None;
        };
        match Self::start(&path) {
            Ok(sound) => {
                info!(path = %path.display(), "playing tick sound");
                Some(sound)
            }
            Err(err) => {
                debug!("tick sound disabled: {err:#}");
                None
            }
        }
    }
}

/// Where the sound file may live, most preferred first.
pub fn candidate_paths(exe_dir: Option<&Path>, cwd: Option<&Path>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::with_capacity(2);
    for dir in [exe_dir, cwd].into_iter().flatten() {
        let path = dir.join(TICK_SOUND_FILE);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}

pub fn default_candidates() -> Vec<PathBuf> {
    let exe = std::env::current_exe().ok();
    let exe_dir = exe.as_deref().and_then(Path::parent);
    let cwd = std::env::current_dir().ok();
    candidate_paths(exe_dir, cwd.as_deref())
}

pub fn locate(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}

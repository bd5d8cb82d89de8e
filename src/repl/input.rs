//! Line input
//!
//! Reads lines on a dedicated OS thread and hands them to the session over a
//! channel. A pending read never holds up runtime shutdown.

use std::io::BufRead;
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Lines buffered between the reader thread and the session.
const LINE_BUFFER: usize = 16;

/// Spawns a detached thread that forwards every line of `reader`.
///
/// The channel closes at end of input, on a read error, or once the
/// receiver is dropped.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);
    thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
        debug!("Input reader finished");
    });
    rx
}

/// Forwards process stdin.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    spawn_line_reader(std::io::BufReader::new(std::io::stdin()))
}

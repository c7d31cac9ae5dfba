use std::io::{self, BufRead};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::LoopEvent;

/// How lines read from an input source map onto input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFeed {
	/// Every line is the complete contents of the input field.
	Lines,
	/// Every line is typed one character at a time, `interval` apart, into a
	/// field that is cleared before each line.
	Keystrokes { interval: Duration },
}

/// Read `reader` on a background thread and forward its lines as
/// [`LoopEvent`]s, finishing with [`LoopEvent::Close`].
///
/// The thread stops early once the receiving side hangs up.
pub fn spawn_input_feed<R>(
	reader: R,
	feed: InputFeed,
	tx: Sender<LoopEvent>,
) -> JoinHandle<io::Result<()>>
where
	R: BufRead + Send + 'static,
{
	thread::spawn(move || {
		for line in reader.lines() {
			let line = line?;
			if !forward_line(&line, feed, &tx) {
				return Ok(());
			}
		}
		let _ = tx.send(LoopEvent::Close);
		Ok(())
	})
}

fn forward_line(line: &str, feed: InputFeed, tx: &Sender<LoopEvent>) -> bool {
	match feed {
		InputFeed::Lines => tx.send(LoopEvent::Input(line.to_string())).is_ok(),
		InputFeed::Keystrokes { interval } => {
			if tx.send(LoopEvent::Input(String::new())).is_err() {
				return false;
			}
			for prefix in prefixes(line) {
				thread::sleep(interval);
				if tx.send(LoopEvent::Input(prefix.to_string())).is_err() {
					return false;
				}
			}
			true
		}
	}
}

/// Every non-empty prefix of `text`, split on character boundaries.
fn prefixes(text: &str) -> impl Iterator<Item = &str> {
	text.char_indices()
		.map(|(index, ch)| &text[..index + ch.len_utf8()])
}

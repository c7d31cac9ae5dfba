use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use typeahead_api::{Callbacks, Completion, Query};

use super::*;
use crate::dispatcher::{Dispatcher, DispatcherConfig};

const DEBOUNCE: Duration = Duration::from_millis(20);

fn options() -> LoopOptions {
	LoopOptions {
		tick: Duration::from_millis(2),
		settle_timeout: Duration::from_secs(2),
	}
}

fn config() -> DispatcherConfig {
	DispatcherConfig::default().with_debounce(DEBOUNCE)
}

/// Resolves on a worker thread after a per-query delay.
fn delayed_transport(
	delay_for: fn(&str) -> Duration,
) -> impl FnMut(Query, Completion<String, String>) {
	move |query: Query, completion: Completion<String, String>| {
		let delay = delay_for(query.text());
		thread::spawn(move || {
			thread::sleep(delay);
			completion.succeed(query.text().to_uppercase());
		});
	}
}

fn recording_sink() -> (
	Callbacks<impl FnMut(String), impl FnMut(String)>,
	Rc<RefCell<Vec<String>>>,
) {
	let seen = Rc::new(RefCell::new(Vec::new()));
	let ok = Rc::clone(&seen);
	let err = Rc::clone(&seen);
	let sink = Callbacks::new(
		move |payload: String| ok.borrow_mut().push(payload),
		move |error: String| err.borrow_mut().push(format!("error: {error}")),
	);
	(sink, seen)
}

#[test]
fn burst_of_input_settles_into_one_query() {
	let (sink, seen) = recording_sink();
	let mut dispatcher = Dispatcher::new(config(), delayed_transport(|_| Duration::ZERO), sink);
	let (tx, rx) = mpsc::channel();
	for text in ["a", "ab", "abc", "dest"] {
		tx.send(LoopEvent::Input(text.into())).unwrap();
	}
	tx.send(LoopEvent::Close).unwrap();

	let summary = run(&mut dispatcher, &rx, options()).unwrap();

	assert_eq!(summary.inputs, 4);
	assert_eq!(summary.issued, 1);
	assert_eq!(summary.delivered, 1);
	assert!(!summary.timed_out);
	assert_eq!(*seen.borrow(), vec!["DEST".to_string()]);
	assert!(dispatcher.is_disposed());
}

#[test]
fn slow_earlier_query_never_overwrites_the_latest() {
	let (sink, seen) = recording_sink();
	let transport = delayed_transport(|text| {
		if text == "dest" {
			Duration::from_millis(150)
		} else {
			Duration::ZERO
		}
	});
	let mut dispatcher = Dispatcher::new(config(), transport, sink);
	let (tx, rx) = mpsc::channel();

	let feeder = thread::spawn(move || {
		tx.send(LoopEvent::Input("dest".into())).unwrap();
		thread::sleep(Duration::from_millis(60));
		tx.send(LoopEvent::Input("desti".into())).unwrap();
		tx.send(LoopEvent::Close).unwrap();
	});

	let summary = run(&mut dispatcher, &rx, options()).unwrap();
	feeder.join().unwrap();

	assert_eq!(summary.issued, 2);
	assert_eq!(*seen.borrow(), vec!["DESTI".to_string()]);
}

#[test]
fn cancel_event_suppresses_the_in_flight_query() {
	let (sink, seen) = recording_sink();
	let transport = delayed_transport(|_| Duration::from_millis(100));
	let mut dispatcher = Dispatcher::new(config(), transport, sink);
	let (tx, rx) = mpsc::channel();

	let feeder = thread::spawn(move || {
		tx.send(LoopEvent::Input("dest".into())).unwrap();
		thread::sleep(Duration::from_millis(50));
		tx.send(LoopEvent::Cancel).unwrap();
		tx.send(LoopEvent::Close).unwrap();
	});

	let summary = run(&mut dispatcher, &rx, options()).unwrap();
	feeder.join().unwrap();

	assert_eq!(summary.issued, 1);
	assert_eq!(summary.delivered, 0);
	assert!(seen.borrow().is_empty());
}

#[test]
fn disconnected_feed_still_flushes_the_pending_query() {
	let (sink, seen) = recording_sink();
	let mut dispatcher = Dispatcher::new(config(), delayed_transport(|_| Duration::ZERO), sink);
	let (tx, rx) = mpsc::channel();
	tx.send(LoopEvent::Input("paris".into())).unwrap();
	drop(tx);

	let summary = run(&mut dispatcher, &rx, options()).unwrap();

	assert_eq!(summary.issued, 1);
	assert_eq!(*seen.borrow(), vec!["PARIS".to_string()]);
}

#[test]
fn unanswered_query_hits_the_settle_timeout() {
	let (sink, seen) = recording_sink();
	let parked = Rc::new(RefCell::new(Vec::new()));
	let keep = Rc::clone(&parked);
	let transport = move |_query: Query, completion: Completion<String, String>| {
		keep.borrow_mut().push(completion);
	};
	let mut dispatcher = Dispatcher::new(config(), transport, sink);
	let (tx, rx) = mpsc::channel();
	tx.send(LoopEvent::Input("dest".into())).unwrap();
	tx.send(LoopEvent::Close).unwrap();

	let options = LoopOptions {
		tick: Duration::from_millis(2),
		settle_timeout: Duration::from_millis(80),
	};
	let summary = run(&mut dispatcher, &rx, options).unwrap();

	assert!(summary.timed_out);
	assert_eq!(summary.issued, 1);
	assert!(seen.borrow().is_empty());
	assert_eq!(parked.borrow().len(), 1);
}

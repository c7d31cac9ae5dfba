//! Drives a dispatcher against the catalog transport the way the binary does.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use typeahead::runtime::{self, LoopEvent};
use typeahead::transports::{Catalog, CatalogOptions, CatalogTransport};
use typeahead::{
	Callbacks, Dispatcher, DispatcherConfig, LoopOptions, ManualClock, ResultSink, SequenceId,
	Suggestion, TransportError,
};

type Delivered = Rc<RefCell<Vec<Result<Vec<Suggestion>, TransportError>>>>;

fn recording_sink() -> (impl ResultSink<Vec<Suggestion>, TransportError>, Delivered) {
	let delivered: Delivered = Rc::default();
	let ok = Rc::clone(&delivered);
	let err = Rc::clone(&delivered);
	let sink = Callbacks::new(
		move |payload: Vec<Suggestion>| ok.borrow_mut().push(Ok(payload)),
		move |error: TransportError| err.borrow_mut().push(Err(error)),
	);
	(sink, delivered)
}

fn catalog() -> Catalog {
	Catalog::new(["Destin", "Denver", "Paris", "Parma", "Oslo"])
}

fn labels(payload: &[Suggestion]) -> Vec<&str> {
	payload.iter().map(|suggestion| suggestion.label.as_str()).collect()
}

#[test]
fn typed_prefix_reaches_the_catalog_once_debounced() {
	let clock = ManualClock::new();
	let transport = CatalogTransport::spawn(catalog(), CatalogOptions::default());
	let (sink, delivered) = recording_sink();
	let config = DispatcherConfig::default()
		.with_min_length(4)
		.with_debounce(Duration::from_millis(250));
	let mut dispatcher = Dispatcher::with_clock(config, transport, sink, clock.clone());

	for text in ["D", "De", "Des", "Dest", "Desti"] {
		dispatcher.on_input_changed(text).unwrap();
		clock.advance(Duration::from_millis(40));
		dispatcher.tick().unwrap();
	}
	clock.advance(Duration::from_millis(250));
	assert_eq!(dispatcher.fire_due().unwrap(), Some(SequenceId::new(1)));

	let deadline = Instant::now() + Duration::from_secs(5);
	while !dispatcher.is_settled() && Instant::now() < deadline {
		thread::sleep(Duration::from_millis(2));
		dispatcher.pump_results().unwrap();
	}

	let delivered = delivered.borrow();
	assert_eq!(delivered.len(), 1);
	let payload = delivered[0].as_ref().unwrap();
	assert_eq!(labels(payload).first(), Some(&"Destin"));
	assert_eq!(dispatcher.state().latest_applied_id(), SequenceId::new(1));
}

#[test]
fn runtime_delivers_only_the_latest_catalog_answer() {
	let options = CatalogOptions {
		latency: Duration::from_millis(80),
		..CatalogOptions::default()
	};
	let transport = CatalogTransport::spawn(catalog(), options);
	let (sink, delivered) = recording_sink();
	let config = DispatcherConfig::default()
		.with_min_length(4)
		.with_debounce(Duration::from_millis(5));
	let mut dispatcher = Dispatcher::new(config, transport, sink);

	let (tx, rx) = mpsc::channel();
	let feeder = thread::spawn(move || {
		tx.send(LoopEvent::Input("Pari".into())).unwrap();
		thread::sleep(Duration::from_millis(40));
		tx.send(LoopEvent::Input("Parma".into())).unwrap();
		tx.send(LoopEvent::Close).unwrap();
	});

	let loop_options = LoopOptions {
		tick: Duration::from_millis(2),
		settle_timeout: Duration::from_secs(5),
	};
	let summary = runtime::run(&mut dispatcher, &rx, loop_options).unwrap();
	feeder.join().unwrap();

	assert_eq!(summary.issued, 2);
	assert_eq!(summary.delivered, 1);
	assert!(!summary.timed_out);
	assert!(dispatcher.is_disposed());

	let delivered = delivered.borrow();
	assert_eq!(delivered.len(), 1);
	let payload = delivered[0].as_ref().unwrap();
	assert_eq!(labels(payload).first(), Some(&"Parma"));
}

#[test]
fn short_input_never_reaches_the_catalog() {
	let transport = CatalogTransport::spawn(catalog(), CatalogOptions::default());
	let (sink, delivered) = recording_sink();
	let config = DispatcherConfig::default().with_debounce(Duration::from_millis(5));
	let mut dispatcher = Dispatcher::new(config, transport, sink);

	let (tx, rx) = mpsc::channel();
	for text in ["O", "Os", "Osl"] {
		tx.send(LoopEvent::Input(text.into())).unwrap();
	}
	tx.send(LoopEvent::Close).unwrap();

	let loop_options = LoopOptions {
		tick: Duration::from_millis(2),
		settle_timeout: Duration::from_millis(200),
	};
	let summary = runtime::run(&mut dispatcher, &rx, loop_options).unwrap();

	assert_eq!(summary.inputs, 3);
	assert_eq!(summary.issued, 0);
	assert!(delivered.borrow().is_empty());
}

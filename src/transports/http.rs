//! Remote lookups over HTTP.
//!
//! Each query becomes `GET <endpoint>?<parameter>=<text>`; the response body
//! is decoded as JSON and handed to the sink untouched.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, trace};
use typeahead_api::{Completion, Query, Transport, TransportError};
use url::Url;

use super::{DEFAULT_HTTP_TIMEOUT, DEFAULT_QUERY_PARAMETER};

/// Connection settings for [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
	pub endpoint: Url,
	pub parameter: String,
	pub timeout: Duration,
}

impl HttpOptions {
	#[must_use]
	pub fn new(endpoint: Url) -> Self {
		Self {
			endpoint,
			parameter: DEFAULT_QUERY_PARAMETER.to_string(),
			timeout: DEFAULT_HTTP_TIMEOUT,
		}
	}
}

/// Sends each query to a remote endpoint from a short-lived worker thread.
///
/// Requests that are already on the wire are never aborted; the dispatcher
/// suppresses their results instead. Requests are not retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
	options: HttpOptions,
}

impl HttpTransport {
	pub fn new(options: HttpOptions) -> Result<Self> {
		let client = Client::builder()
			.timeout(options.timeout)
			.build()
			.context("failed to build HTTP client")?;
		Ok(Self { client, options })
	}

	/// Full request URL for `text`, keeping any query string already on the
	/// endpoint.
	#[must_use]
	pub fn request_url(&self, text: &str) -> Url {
		let mut url = self.options.endpoint.clone();
		url.query_pairs_mut()
			.append_pair(&self.options.parameter, text);
		url
	}
}

impl Transport<Value, TransportError> for HttpTransport {
	fn dispatch(&mut self, query: Query, completion: Completion<Value, TransportError>) {
		let client = self.client.clone();
		let url = self.request_url(query.text());
		thread::spawn(move || {
			if completion.is_superseded() {
				trace!(sequence_id = %query.sequence_id(), "skipping superseded request");
				completion.fail(TransportError::Superseded {
					sequence_id: query.sequence_id(),
				});
				return;
			}
			debug!(sequence_id = %query.sequence_id(), %url, "sending lookup request");
			completion.resolve(fetch(&client, url, query.text()));
		});
	}
}

fn fetch(client: &Client, url: Url, text: &str) -> Result<Value, TransportError> {
	let response = client
		.get(url)
		.send()
		.map_err(|err| TransportError::Request {
			query: text.to_string(),
			message: err.to_string(),
		})?;

	let status = response.status();
	if !status.is_success() {
		return Err(TransportError::Status {
			query: text.to_string(),
			status: status.as_u16(),
		});
	}

	response
		.json::<Value>()
		.map_err(|err| TransportError::Decode {
			query: text.to_string(),
			message: err.to_string(),
		})
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::sync::Arc;
	use std::sync::atomic::AtomicU64;
	use std::sync::mpsc;

	use serde_json::json;
	use typeahead_api::{QueryResult, SequenceId};

	use super::*;

	/// Serve a single canned response and report the request line.
	fn serve_once(status: &'static str, body: &'static str) -> (Url, mpsc::Receiver<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let address = listener.local_addr().unwrap();
		let (line_tx, line_rx) = mpsc::channel();

		thread::spawn(move || {
			let (stream, _) = listener.accept().unwrap();
			let mut reader = BufReader::new(stream.try_clone().unwrap());
			let mut request_line = String::new();
			reader.read_line(&mut request_line).unwrap();
			loop {
				let mut header = String::new();
				reader.read_line(&mut header).unwrap();
				if header == "\r\n" || header.is_empty() {
					break;
				}
			}
			line_tx.send(request_line.trim_end().to_string()).unwrap();

			let mut stream = stream;
			write!(
				stream,
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			)
			.unwrap();
		});

		let endpoint = Url::parse(&format!("http://{address}/trips/search/")).unwrap();
		(endpoint, line_rx)
	}

	fn lookup(
		transport: &mut HttpTransport,
		text: &str,
	) -> QueryResult<Value, TransportError> {
		let (tx, rx) = mpsc::channel();
		let id = SequenceId::new(1);
		let completion = Completion::new(id, 0, Arc::new(AtomicU64::new(1)), tx);
		transport.dispatch(Query::new(text, id), completion);
		rx.recv_timeout(Duration::from_secs(10)).unwrap()
	}

	#[test]
	fn request_url_appends_the_query_parameter() {
		let endpoint = Url::parse("https://example.test/search/?lang=en").unwrap();
		let transport = HttpTransport::new(HttpOptions::new(endpoint)).unwrap();

		let url = transport.request_url("New York");

		assert_eq!(url.as_str(), "https://example.test/search/?lang=en&query=New+York");
	}

	#[test]
	fn successful_response_is_decoded_as_json() {
		let (endpoint, request_line) = serve_once("200 OK", r#"["Destin","Denver"]"#);
		let mut transport = HttpTransport::new(HttpOptions::new(endpoint)).unwrap();

		let result = lookup(&mut transport, "dest");

		assert_eq!(result.outcome, Ok(json!(["Destin", "Denver"])));
		let line = request_line.recv_timeout(Duration::from_secs(5)).unwrap();
		assert_eq!(line, "GET /trips/search/?query=dest HTTP/1.1");
	}

	#[test]
	fn error_status_becomes_a_status_error() {
		let (endpoint, _request_line) = serve_once("502 Bad Gateway", "{}");
		let mut transport = HttpTransport::new(HttpOptions::new(endpoint)).unwrap();

		let result = lookup(&mut transport, "dest");

		assert_eq!(
			result.outcome,
			Err(TransportError::Status {
				query: "dest".into(),
				status: 502,
			})
		);
	}

	#[test]
	fn malformed_body_becomes_a_decode_error() {
		let (endpoint, _request_line) = serve_once("200 OK", "not json");
		let mut transport = HttpTransport::new(HttpOptions::new(endpoint)).unwrap();

		let result = lookup(&mut transport, "dest");

		assert!(matches!(result.outcome, Err(TransportError::Decode { .. })));
	}
}

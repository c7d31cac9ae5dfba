use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use typeahead::Suggestion;

use super::OutputFormat;

/// Payloads the CLI knows how to print.
pub(crate) trait Render: Serialize {
	/// Human readable labels, best first.
	fn labels(&self) -> Vec<String>;
}

impl Render for Vec<Suggestion> {
	fn labels(&self) -> Vec<String> {
		self.iter()
			.map(|suggestion| suggestion.label.clone())
			.collect()
	}
}

impl Render for Value {
	fn labels(&self) -> Vec<String> {
		match self {
			Value::Array(items) => items.iter().map(label_for).collect(),
			other => vec![label_for(other)],
		}
	}
}

/// Pick a display label out of an arbitrary JSON item.
fn label_for(item: &Value) -> String {
	match item {
		Value::String(text) => text.clone(),
		Value::Object(fields) => ["label", "name", "title"]
			.iter()
			.find_map(|key| fields.get(*key).and_then(Value::as_str))
			.map_or_else(|| item.to_string(), str::to_string),
		other => other.to_string(),
	}
}

/// Render one delivered payload as a single output line.
pub(crate) fn format_payload<P: Render>(format: OutputFormat, payload: &P) -> Result<String> {
	match format {
		OutputFormat::Plain => {
			let labels = payload.labels();
			if labels.is_empty() {
				Ok("(no suggestions)".to_string())
			} else {
				Ok(labels.join(", "))
			}
		}
		OutputFormat::Json => Ok(serde_json::to_string(payload)?),
	}
}

/// Print one delivered payload to stdout.
pub(crate) fn print_payload<P: Render>(format: OutputFormat, payload: &P) -> Result<()> {
	let line = format_payload(format, payload)?;
	let mut stdout = io::stdout().lock();
	writeln!(stdout, "{line}")?;
	stdout.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn plain_output_joins_suggestion_labels() {
		let payload = vec![Suggestion::new("Destin", 90), Suggestion::new("Denver", 40)];
		let line = format_payload(OutputFormat::Plain, &payload).unwrap();
		assert_eq!(line, "Destin, Denver");
	}

	#[test]
	fn plain_output_marks_empty_results() {
		let payload: Vec<Suggestion> = Vec::new();
		let line = format_payload(OutputFormat::Plain, &payload).unwrap();
		assert_eq!(line, "(no suggestions)");
	}

	#[test]
	fn json_output_is_a_single_line() {
		let payload = vec![Suggestion::new("Destin", 90)];
		let line = format_payload(OutputFormat::Json, &payload).unwrap();
		assert_eq!(line, r#"[{"label":"Destin","score":90}]"#);
	}

	#[test]
	fn remote_items_use_their_best_label_field() {
		let payload = json!([
			"Oslo",
			{ "name": "Paris", "id": 7 },
			{ "label": "Rome", "name": "Roma" },
			{ "id": 3 }
		]);
		assert_eq!(
			payload.labels(),
			vec!["Oslo", "Paris", "Rome", r#"{"id":3}"#]
		);
	}
}

use super::{ResolvedConfig, TransportKind};

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Minimum length: {}", config.dispatcher.min_length);
	println!("  Debounce: {}", format_millis(config.dispatcher.debounce.as_millis()));
	println!("  Transport: {}", config.transport.kind.as_str());
	match config.transport.kind {
		TransportKind::Catalog => {
			match &config.transport.catalog {
				Some(path) => println!("  Catalog: {}", path.display()),
				None => println!("  Catalog: (built-in destinations)"),
			}
			println!("  Limit: {}", config.transport.catalog_options.limit);
			if !config.transport.catalog_options.latency.is_zero() {
				println!(
					"  Latency: {}",
					format_millis(config.transport.catalog_options.latency.as_millis())
				);
			}
		}
		TransportKind::Http => {
			println!(
				"  Endpoint: {}",
				config.transport.endpoint.as_deref().unwrap_or("(none)")
			);
			println!("  Query parameter: {}", config.transport.parameter);
			println!("  Timeout: {}", format_millis(config.transport.timeout.as_millis()));
		}
	}
	println!("  Tick: {}", format_millis(config.loop_options.tick.as_millis()));
	println!(
		"  Settle timeout: {}",
		format_millis(config.loop_options.settle_timeout.as_millis())
	);
	println!("  Log filter: {}", config.logging.filter);
}

fn format_millis(millis: u128) -> String {
	format!("{millis}ms")
}

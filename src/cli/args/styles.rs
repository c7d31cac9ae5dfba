use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use typeahead::app_dirs;

/// Version banner listing where configuration is read from and which
/// transports were compiled in.
pub(super) fn long_version() -> &'static str {
	let config_file = match app_dirs::get_config_dir() {
		Ok(path) => path.join("config.toml").display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let transports = if cfg!(feature = "http") {
		"catalog, http"
	} else {
		"catalog"
	};

	let mut banner = format!("typeahead {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(banner);
	let _ = writeln!(banner, "config file: {config_file}");
	let _ = writeln!(banner, "transports: {transports}");

	Box::leak(banner.into_boxed_str())
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.valid(AnsiColor::Cyan.on_default())
		.invalid(AnsiColor::Yellow.on_default())
}

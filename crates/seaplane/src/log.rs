//! Timestamped line logger.
//!
//! `sea_log!("Hello {}", "seaplane")` prints
//! `2026-10-16 09:30:12.345 [src/bin/main.rs:8] Hello seaplane`.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::panic::Location;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Log a pre-formatted message, attributed to the caller.
#[track_caller]
pub fn log(message: fmt::Arguments<'_>) {
    log_at(Location::caller(), message);
}

/// Log a message attributed to an explicit source location.
pub fn log_at(location: &Location<'_>, message: fmt::Arguments<'_>) {
    let line = format_line(&Utc::now(), location.file(), location.line(), message);
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{}", line);
}

/// Build one log line. Split out from [`log_at`] so the layout can be tested.
pub fn format_line<Tz>(timestamp: &DateTime<Tz>, file: &str, line: u32, message: impl Display) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} [{}:{}] {}",
        timestamp.format(TIMESTAMP_FORMAT),
        file,
        line,
        message
    )
}

/// Print a timestamped line tagged with the call site.
#[macro_export]
macro_rules! sea_log {
    ($($arg:tt)*) => {
        $crate::log::log(::std::format_args!($($arg)*))
    };
}

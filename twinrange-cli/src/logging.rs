//! Logging setup using `tracing-subscriber`.
//!
//! Logs go to stderr so stdout stays clean for JSON output. `RUST_LOG`
//! overrides the level chosen by `-v` / `-q`.

use tracing_subscriber::EnvFilter;

pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0, false), "warn");
        assert_eq!(level_for(2, false), "debug");
        assert_eq!(level_for(9, false), "trace");
        assert_eq!(level_for(3, true), "error");
    }
}

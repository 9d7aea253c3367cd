use crate::Cli;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Picks the log level from `-v`, else from a `LOG_LEVEL` value. An
/// unrecognized value falls back to INFO and comes back as a warning to emit
/// once logging is up.
pub(crate) fn resolve_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }

    match env_val.map(str::trim) {
        None => (DEFAULT_LOG_LEVEL, None),
        Some(level) => match level.to_ascii_lowercase().as_str() {
            "debug" | "verbose" => (tracing::Level::DEBUG, None),
            "info" => (tracing::Level::INFO, None),
            "trace" => (tracing::Level::TRACE, None),
            _ => (DEFAULT_LOG_LEVEL, Some(format!(
                "Invalid `LOG_LEVEL` environment variable value: `{level}`",
            ))),
        },
    }
}

pub(crate) fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = resolve_log_level(cli.verbose, env_val.as_deref());

    // stdout carries command output, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_wins_over_env() {
        assert_eq!(
            resolve_log_level(true, Some("trace")),
            (tracing::Level::DEBUG, None),
        );
    }

    #[test]
    fn env_levels_are_case_insensitive() {
        assert_eq!(resolve_log_level(false, Some("TRACE")).0, tracing::Level::TRACE);
        assert_eq!(resolve_log_level(false, Some(" info ")).0, tracing::Level::INFO);
        assert_eq!(resolve_log_level(false, Some("Verbose")).0, tracing::Level::DEBUG);
    }

    #[test]
    fn missing_env_uses_default() {
        assert_eq!(resolve_log_level(false, None), (DEFAULT_LOG_LEVEL, None));
    }

    #[test]
    fn invalid_env_warns_and_uses_default() {
        let (level, warning) = resolve_log_level(false, Some("loud"));

        assert_eq!(level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            warning.as_deref(),
            Some("Invalid `LOG_LEVEL` environment variable value: `loud`"),
        );
    }
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber for the interactive binary.
///
/// Logs are written to stderr so they never mix with the menu on stdout.
/// `RUST_LOG` wins over everything else; otherwise `verbose` selects debug
/// output and `level` (from the config file) replaces the default `warn`.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let directive = default_directive(verbose, level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn default_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        return "course_planner=debug".to_string();
    }
    match level {
        Some(level) => format!("course_planner={}", level.to_ascii_lowercase()),
        None => "course_planner=warn".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, None), "course_planner=warn");
        assert_eq!(default_directive(false, Some("INFO")), "course_planner=info");
        assert_eq!(default_directive(true, Some("error")), "course_planner=debug");
    }
}

use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt,
    prelude::*,
    registry::LookupSpan,
};

/// Environment variable holding filter directives that replace `-v`/`-q` on the console.
pub const LOG_ENV: &str = "XRAYREF_LOG";

/// Target of the resolver's reference decisions.
const RESOLVER_TARGET: &str = "xrayref::engine::resolver";

/// Console directives: dependencies stay at `warn`, `-v` raises the library's own events.
fn console_directives(verbosity: u8, quiet: bool) -> String {
    if quiet {
        return "error".to_string();
    }
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,xrayref={level}")
}

/// The log file always records debug events of the library and every resolver decision.
fn file_directives(verbosity: u8) -> String {
    if verbosity >= 3 {
        "warn,xrayref=trace".to_string()
    } else {
        format!("warn,xrayref=debug,{RESOLVER_TARGET}=trace")
    }
}

/// Directives from [`LOG_ENV`] win when they parse; otherwise the flags decide.
fn console_filter(verbosity: u8, quiet: bool, env: Option<&str>) -> EnvFilter {
    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(console_directives(verbosity, quiet)))
}

fn console_layer<S>(filter: EnvFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(filter)
}

fn file_layer<S>(file: File, verbosity: u8) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_filter(EnvFilter::new(file_directives(verbosity)))
}

/// Installs the global subscriber: a compact stderr layer and, with `log_file`,
/// an appending file layer that keeps the resolver's decisions.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let registry = tracing_subscriber::registry()
        .with(console_layer(console_filter(verbosity, quiet, env.as_deref())));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry.with(file_layer(file, verbosity)).try_init()?;
        }
        None => registry.try_init()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use serial_test::serial;
    use xrayref::engine::{PropertyKind, PropertyTable, Resolver, Subject};
    use xrayref::core::descriptors::{Element, Reference};

    #[test]
    fn verbosity_raises_only_library_events() {
        assert_eq!(console_directives(0, false), "warn");
        assert_eq!(console_directives(1, false), "warn,xrayref=info");
        assert_eq!(console_directives(2, false), "warn,xrayref=debug");
        assert_eq!(console_directives(7, false), "warn,xrayref=trace");
        assert_eq!(console_directives(3, true), "error");
    }

    #[test]
    fn environment_directives_replace_flags() {
        let filter = console_filter(0, true, Some("xrayref::workflows=debug"));
        assert_eq!(filter.to_string(), "xrayref::workflows=debug");

        let fallback = console_filter(2, false, Some("   "));
        assert_eq!(fallback.to_string(), EnvFilter::new("warn,xrayref=debug").to_string());
    }

    #[test]
    fn log_file_keeps_resolver_decisions_at_any_verbosity() {
        assert!(file_directives(0).contains("xrayref::engine::resolver=trace"));
        assert_eq!(file_directives(3), "warn,xrayref=trace");
    }

    #[test]
    #[serial(logging)]
    fn file_layer_records_reference_choice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xrayref.log");
        let file = File::create(&path).unwrap();
        let subscriber = tracing_subscriber::registry().with(file_layer(file, 0));

        let fe = Subject::Element(Element::new(26).unwrap());
        let mut table = PropertyTable::new();
        table.insert(PropertyKind::ElementAtomicWeight, fe.clone(), Reference::new("ref1").unwrap(), 55.845);
        table.insert(PropertyKind::ElementAtomicWeight, fe, Reference::new("ref2").unwrap(), 58.0);
        let mut resolver = Resolver::new(table);
        resolver.set_reference_priority(["ref2"]);

        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(resolver.element_atomic_weight(26, None).unwrap(), 58.0);
            tracing::trace!(target: "xrayref::workflows::query", "Window scan detail.");
        });

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Resolved by priority."));
        assert!(content.contains(RESOLVER_TARGET));
        assert!(content.contains("reference=ref2"));
        assert!(!content.contains("Window scan detail."));
    }

    #[test]
    #[serial(logging)]
    fn directory_as_log_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = setup_logging(0, false, Some(dir.path()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}

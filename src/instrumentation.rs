//! Span timing for the search hot paths.
//!
//! Compiled only with `--features instrumentation`. Spans are opened by the
//! `instrument` attributes on the search and the evaluator.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use once_cell::sync::Lazy;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Span name to (calls, total nanoseconds).
static SPAN_TIMINGS: Lazy<Mutex<HashMap<String, (u64, u64)>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = match span.extensions_mut().remove::<Instant>() {
            Some(started) => started,
            None => return,
        };

        if let Ok(mut timings) = SPAN_TIMINGS.lock() {
            let entry = timings.entry(span.name().to_string()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += started.elapsed().as_nanos() as u64;
        }
    }
}

/// Installs the timing layer. With `RUST_LOG` set, span events are printed
/// as well.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let verbose = std::env::var("RUST_LOG")
        .map(|filter| !filter.is_empty() && filter != "off")
        .unwrap_or(false);

    let result = if verbose {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(error) = result {
        log::warn!("tracing subscriber already installed: {}", error);
    }
}

/// Prints per-span call counts and times to stderr, slowest first.
pub fn print_timing_statistics() {
    let timings = match SPAN_TIMINGS.lock() {
        Ok(timings) => timings.clone(),
        Err(_) => return,
    };

    if timings.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    let mut entries: Vec<_> = timings.into_iter().collect();
    entries.sort_by_key(|(_, (_, total))| std::cmp::Reverse(*total));

    eprintln!("\n{:<32} {:>12} {:>12} {:>12}", "Span", "Calls", "Total (ms)", "Avg (µs)");
    eprintln!("{:-<72}", "");
    for (name, (calls, nanos)) in &entries {
        eprintln!(
            "{:<32} {:>12} {:>12.2} {:>12.2}",
            name,
            calls,
            *nanos as f64 / 1_000_000.0,
            *nanos as f64 / *calls.max(&1) as f64 / 1_000.0
        );
    }
}

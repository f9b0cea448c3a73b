//! Logging for the pms binary
//!
//! One subscriber: an `EnvFilter` (RUST_LOG, else `info`, or `debug` with
//! `--debug`), compact stderr output, and an OTLP span exporter layered on
//! top when built with the `telemetry` feature and run with `--otel`.
//!
//! OTLP honours OTEL_EXPORTER_OTLP_ENDPOINT (default http://localhost:4317)
//! and OTEL_SERVICE_NAME (default pms).

use anyhow::{anyhow, Result};
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub debug: bool,
    pub otel: bool,
}

/// Install the global subscriber.
pub fn init(config: &TracingConfig) -> Result<()> {
    let level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = tracing_subscriber::fmt::layer()
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(otlp_layer(config.otel)?)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        tracing::warn!("--otel ignored: pms was built without the telemetry feature");
    }

    Ok(())
}

#[cfg(feature = "telemetry")]
fn otlp_layer<S>(enabled: bool) -> Result<Option<impl Layer<S>>>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;

    if !enabled {
        return Ok(None);
    }

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());
    let service = std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "pms".to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("Failed to create OTLP exporter at {}: {}", endpoint, e))?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(opentelemetry_sdk::Resource::new([KeyValue::new(
            "service.name",
            service,
        )]))
        .build();

    let tracer = provider.tracer("pms");
    // The global handle keeps the provider (and its exporter) alive.
    let _ = opentelemetry::global::set_tracer_provider(provider);

    Ok(Some(tracing_opentelemetry::layer().with_tracer(tracer)))
}

#[cfg(not(feature = "telemetry"))]
fn otlp_layer<S>(_enabled: bool) -> Result<Option<impl Layer<S>>>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    Ok(None::<tracing_subscriber::layer::Identity>)
}

/// Flush pending spans before exit.
pub fn shutdown_otel() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_exporter_without_otel_flag() {
        let layer = otlp_layer::<tracing_subscriber::Registry>(false).unwrap();
        assert!(layer.is_none());
    }
}

use std::sync::Arc;
use std::time::Duration;

use painel::Painel;
use painel_mock::MockSource;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,painel=debug (build with --features tracing)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // 1. Build against the deterministic fixtures.
    let painel = Painel::builder()
        .with_source(Arc::new(MockSource::new()))
        .cache_ttl(Duration::from_secs(30))
        .build()?;

    // 2. First call builds, second is served from the cache.
    let first = painel.status().await;
    let second = painel.status().await;
    println!("{}", serde_json::to_string_pretty(&first)?);
    println!(
        "cached: {}",
        first.snapshot().map(|s| &s.gerado_em) == second.snapshot().map(|s| &s.gerado_em)
    );

    // 3. A missing worksheet becomes an error payload, not a failure.
    let broken = Painel::builder()
        .with_source(Arc::new(MockSource::without_table(painel::Table::Gastos)))
        .build()?;
    println!("{}", serde_json::to_string(&broken.status().await)?);

    Ok(())
}

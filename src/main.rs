use anyhow::Result;
use panelnorm::{pipeline, PanelPaths};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,panelnorm=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) configure paths ──────────────────────────────────────────
    let paths = PanelPaths::from_env();
    info!(
        csv = %paths.csv.display(),
        json = %paths.json.display(),
        js = %paths.js.display(),
        "startup"
    );

    // ─── 3) normalize + write ────────────────────────────────────────
    let summary = pipeline::run(&paths)?;

    println!("{}", summary.message());
    Ok(())
}

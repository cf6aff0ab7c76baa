use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diagonal_advisor::api::run_server;
use diagonal_advisor::config::Config;
use diagonal_advisor::strategies::{evaluate, Preset};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diagonal_advisor=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    print_banner(&config);

    // Log the built-in presets
    for preset in Preset::all() {
        let result = evaluate(&preset.inputs());
        info!(
            "📋 Preset {}: {} | score={} | {}",
            preset,
            result.name,
            result.score,
            result.advice.label()
        );
    }

    run_server(config).await?;
    Ok(())
}

fn print_banner(config: &Config) {
    println!("\n╔═══════════════════════════════════════════════════════════╗");
    println!("║          Option Strategy Decision Advisor                 ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("📈 Volatility Source: {}", config.volatility_source);
    println!("📊 Advice Thresholds:");
    println!("   • Open: score ≥ {}", config.advisor.open_score_threshold);
    println!("   • Small: score ≥ {}", config.advisor.small_score_threshold);
    println!(
        "   • Earnings Penalty: ≤ {} days and IV rank > {}",
        config.advisor.earnings_window_days, config.advisor.earnings_iv_rank_gate
    );
    println!("🌐 Listening on: {}", config.server.bind_addr);
    println!();
    println!("Press Ctrl+C to stop");
    println!("═══════════════════════════════════════════════════════════");
    println!();
}

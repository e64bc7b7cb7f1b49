//! mazegen quickstart: configure, generate, regenerate, export.
//!
//! Run with:
//!   cargo run -p mazegen-engine --example quickstart

use mazegen_carve::Algorithm;
use mazegen_engine::{ConfigError, MazeConfig, MazeSession};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ─── Configure ──────────────────────────────────────────────

    let config = MazeConfig::builder()
        .width(20)
        .height(15)
        .entry((0, 0))
        .exit((19, 14))
        .algorithm(Algorithm::from_token_or_default("prim"))
        .perfect(true)
        .seed(42)
        .build()?;

    // ─── Generate ───────────────────────────────────────────────

    let mut session = MazeSession::new(config)?;
    println!("{}", session.last_report());
    println!("{}", session.export()?);

    // ─── Regenerate ─────────────────────────────────────────────

    for alg in Algorithm::ALL {
        let report = session.set_algorithm(alg);
        println!("{report}");
    }
    session.set_perfect(false);
    println!("imperfect: {}", session.last_report());

    // Invalid endpoints are rejected and the maze is kept.
    match session.set_endpoints((0, 0).into(), (0, 0).into()) {
        Err(ConfigError::EntryEqualsExit { coord }) => println!("rejected: entry = exit = {coord}"),
        other => println!("unexpected: {other:?}"),
    }
    Ok(())
}

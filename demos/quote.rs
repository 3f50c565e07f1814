//! Quoting swaps against an in-memory ledger.
//!
//! Demonstrates loading configuration from TOML, resolving reserves by pool
//! id, and pricing swaps both by pool and from raw reserves.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=trace cargo run --example quote
//! ```

use evodex_pricer::config::PricerConfig;
use evodex_pricer::domain::{AccountName, Asset, AssetType, ExtendedAsset, FeeRate, PoolId, ReservePair};
use evodex_pricer::pricing::{quote, SwapPricer};
use evodex_pricer::store::{InMemoryLedger, LedgerWithTracing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Constant Product Pricer (x · y = k) ===\n");

    // ── 1. Configuration ────────────────────────────────────────────────
    let config = PricerConfig::from_toml_str("defaultFee = 30")?;
    println!("Default fee: {}", config.default_fee());

    // ── 2. Ledger with one pool, stored USDT-first ──────────────────────
    let dex = AccountName::new("evolutiondex")?;
    let record = ReservePair::new(
        PoolId::parse("EOSUSDT")?,
        ExtendedAsset::new("13614.8381 USDT".parse()?, dex),
        ExtendedAsset::new("4638.5353 EOS".parse()?, dex),
        FeeRate::new(30)?,
        dex,
    )?;
    println!("Pool: {record}");

    let ledger: InMemoryLedger = [record].into_iter().collect();
    let pricer = SwapPricer::new(LedgerWithTracing::new(ledger), config);

    // ── 3. Reserves oriented by the asset we sell ───────────────────────
    let eos: AssetType = "4,EOS".parse()?;
    let usdt: AssetType = "4,USDT".parse()?;
    let (eos_reserve, usdt_reserve) = pricer.lookup().get_reserve_assets(&PoolId::parse("EOSUSDT")?, &eos)?;
    println!("\nReserves sorted by EOS: {eos_reserve} / {usdt_reserve}");

    // ── 4. Pool-resolving quotes in both directions ─────────────────────
    for (input, out_type) in [("1.0000 EOS", usdt), ("10.0000 USDT", eos)] {
        let input: Asset = input.parse()?;
        let out = pricer.amount_out_for_pool_str(&input, &out_type, "EOSUSDT")?;
        println!("  {input} -> {out}");
    }

    // ── 5. Raw-reserve quote with the full breakdown ────────────────────
    let q = quote(10_000, 45_851_931_234, 46_851_931_234, FeeRate::new(5)?)?;
    println!("\nRaw quote at 5bp: {q}");

    // ── 6. Dust is rejected rather than paying zero ─────────────────────
    let dust: Asset = "0.0001 USDT".parse()?;
    match pricer.amount_out_for_pool_str(&dust, &eos, "EOSUSDT") {
        Ok(out) => println!("\nDust swap paid {out}"),
        Err(e) => println!("\nDust swap rejected: {e}"),
    }

    Ok(())
}

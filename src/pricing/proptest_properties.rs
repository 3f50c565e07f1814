//! Property-based tests using `proptest` for the pricing invariants.
//!
//! 1. **Determinism**: identical inputs give identical quotes.
//! 2. **Fee rounding**: fee is exactly `⌈gross · bps / 10 000⌉`.
//! 3. **Monotonicity**: more input never yields less output.
//! 4. **Bounded output**: output is strictly below the output reserve.
//! 5. **Invariant preservation**: the pool never loses product before fee.
//! 6. **Dust**: tiny trades either pay out or fail with `InvalidReturn`.
//! 7. **Orientation**: lookups put the sort asset first.
//! 8. **Composition**: pool-resolving quotes equal raw quotes.

use proptest::prelude::*;

use super::{amount_out, quote, PoolLookup, SwapPricer};
use crate::config::PricerConfig;
use crate::domain::{
    AccountName, Amount, Asset, AssetType, ExtendedAsset, FeeRate, PoolId, ReservePair,
};
use crate::error::PricerError;
use crate::store::InMemoryLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn fee(bps: u32) -> FeeRate {
    let Ok(f) = FeeRate::new(bps) else {
        panic!("valid fee");
    };
    f
}

fn ty(s: &str) -> AssetType {
    let Ok(t) = s.parse() else {
        panic!("valid asset type");
    };
    t
}

fn pool_id() -> PoolId {
    let Ok(id) = PoolId::parse("EOSUSDT") else {
        panic!("valid pool id");
    };
    id
}

fn make_record(eos: i64, usdt: i64, bps: u32, eos_first: bool) -> ReservePair {
    let Ok(dex) = AccountName::new("evolutiondex") else {
        panic!("valid name");
    };
    let eos = ExtendedAsset::new(Asset::new(Amount::new(eos), ty("4,EOS")), dex);
    let usdt = ExtendedAsset::new(Asset::new(Amount::new(usdt), ty("4,USDT")), dex);
    let (p1, p2) = if eos_first { (eos, usdt) } else { (usdt, eos) };
    let Ok(r) = ReservePair::new(pool_id(), p1, p2, fee(bps), dex) else {
        panic!("valid record");
    };
    r
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves up to 10^15 keep `reserve_in' · reserve_out` inside `u128`.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    1u64..=1_000_000_000_000_000u64
}

fn amount_strategy() -> impl Strategy<Value = u64> {
    1u64..=u64::from(u32::MAX)
}

fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=10_000u32
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_deterministic(
        a in any::<u64>(),
        ri in any::<u64>(),
        ro in any::<u64>(),
        bps in fee_strategy(),
    ) {
        prop_assert_eq!(quote(a, ri, ro, fee(bps)), quote(a, ri, ro, fee(bps)));
    }

    #[test]
    fn prop_fee_rounds_up(
        a in amount_strategy(),
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        bps in 1u32..=10_000u32,
    ) {
        let Ok(q) = quote(a, ri, ro, fee(bps)) else {
            return Ok(());
        };
        let scaled = u128::from(q.gross_out()) * u128::from(bps);
        let charged = u128::from(q.fee()) * 10_000;
        prop_assert!(charged >= scaled);
        prop_assert!(charged < scaled + 10_000);
        if scaled % 10_000 != 0 {
            prop_assert!(charged > scaled);
        }
        prop_assert_eq!(q.amount_out(), q.gross_out() - q.fee());
    }

    #[test]
    fn prop_monotone_in_amount(
        a in amount_strategy(),
        extra in amount_strategy(),
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        bps in fee_strategy(),
    ) {
        let small = amount_out(a, ri, ro, fee(bps));
        let large = amount_out(a + extra, ri, ro, fee(bps));
        if let Ok(s) = small {
            let Ok(l) = large else {
                return Err(TestCaseError::fail("larger input failed where smaller succeeded"));
            };
            prop_assert!(l >= s, "out({}) = {} < out({}) = {}", a + extra, l, a, s);
        }
    }

    #[test]
    fn prop_output_below_reserve(
        a in any::<u64>(),
        ri in 1u64..=u64::MAX,
        ro in 1u64..=u64::MAX,
        bps in fee_strategy(),
    ) {
        if let Ok(out) = amount_out(a, ri, ro, fee(bps)) {
            prop_assert!(out > 0);
            prop_assert!(out < ro);
        }
    }

    #[test]
    fn prop_product_never_decreases(
        a in amount_strategy(),
        ri in reserve_strategy(),
        ro in reserve_strategy(),
    ) {
        let Ok(q) = quote(a, ri, ro, FeeRate::ZERO) else {
            return Ok(());
        };
        let before = u128::from(ri) * u128::from(ro);
        let after = (u128::from(ri) + u128::from(a)) * u128::from(ro - q.gross_out());
        prop_assert!(after >= before);
    }

    #[test]
    fn prop_dust_never_returns_zero(
        ri in 1u64..=1_000u64,
        ro in 1u64..=1_000u64,
        bps in fee_strategy(),
    ) {
        match amount_out(1, ri, ro, fee(bps)) {
            Ok(out) => prop_assert!(out > 0),
            Err(e) => prop_assert_eq!(e, PricerError::InvalidReturn),
        }
    }

    #[test]
    fn prop_orientation(
        eos in 1i64..=i64::MAX,
        usdt in 1i64..=i64::MAX,
        eos_first in any::<bool>(),
    ) {
        let ledger: InMemoryLedger = [make_record(eos, usdt, 30, eos_first)].into_iter().collect();
        let lookup = PoolLookup::new(ledger, PricerConfig::default());
        prop_assert_eq!(
            lookup.get_reserves(&pool_id(), &ty("4,EOS")),
            Ok((Amount::new(eos), Amount::new(usdt)))
        );
        prop_assert_eq!(
            lookup.get_reserves(&pool_id(), &ty("4,USDT")),
            Ok((Amount::new(usdt), Amount::new(eos)))
        );
    }

    #[test]
    fn prop_pool_quote_matches_raw(
        input in 1i64..=i64::from(u32::MAX),
        eos in 1i64..=1_000_000_000_000_000i64,
        usdt in 1i64..=1_000_000_000_000_000i64,
        bps in fee_strategy(),
        eos_first in any::<bool>(),
    ) {
        let ledger: InMemoryLedger =
            [make_record(eos, usdt, bps, eos_first)].into_iter().collect();
        let pricer = SwapPricer::new(ledger, PricerConfig::default());
        let resolved = pricer
            .amount_out_for_pool(&Asset::new(Amount::new(input), ty("4,EOS")), &ty("4,USDT"), &pool_id())
            .map(|a| a.amount().get() as u64);
        let raw = amount_out(input as u64, eos as u64, usdt as u64, fee(bps));
        prop_assert_eq!(resolved, raw);
    }
}

// Proptest prelude for the round-level integration properties.
//
// Env knobs:
// - PROPTEST_CASES: rounds generated per property (default 8; each case plays
//   one to three full rounds).
// - PROPTEST_MAX_SHRINK_MS: cap on shrinking time in milliseconds.
//
// Inputs are plain seeds, so no case is ever rejected.

use proptest::prelude::ProptestConfig;

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|s| s.parse::<u32>().ok())
}

pub fn proptest_prelude_config() -> ProptestConfig {
    let base = ProptestConfig::default();
    ProptestConfig {
        failure_persistence: None,
        cases: env_u32("PROPTEST_CASES").unwrap_or(8).max(1),
        max_shrink_time: env_u32("PROPTEST_MAX_SHRINK_MS").unwrap_or(base.max_shrink_time),
        ..base
    }
}

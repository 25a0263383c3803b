//! Shared test helpers.

pub mod matcher_contract;

/// Install a `fmt` subscriber filtered by `RUST_LOG`; repeated calls are
/// no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert a single expanded distance, naming both tags on failure.
#[macro_export]
macro_rules! assert_distance {
    ($desired:expr, $supported:expr, $expected:expr) => {{
        let actual = $crate::distance($desired, $supported).expect("fixture tags parse");
        assert_eq!(
            actual, $expected,
            "distance({:?} -> {:?}) = {}, expected {}",
            $desired, $supported, actual, $expected
        );
    }};
}

//! Configuration errors stop a run before anything is generated.

use loop_bench::{ConfigError, RunConfig, Runner};

#[test]
fn negative_and_zero_sizes_are_rejected() {
    assert_eq!(
        RunConfig::from_sizes(&[-1]),
        Err(ConfigError::NonPositiveSize { size: -1 })
    );
    assert_eq!(
        RunConfig::from_sizes(&[0]),
        Err(ConfigError::NonPositiveSize { size: 0 })
    );
}

#[test]
fn first_offending_size_is_reported() {
    let err = RunConfig::from_sizes(&[100, 0, -5]).unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveSize { size: 0 });
    assert_eq!(err.to_string(), "input size 0 is not positive");
}

#[test]
fn unsupported_size_is_rejected() {
    let err = RunConfig::from_sizes(&[1_000_000, 42]).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedSize { size: 42, .. }));
    assert!(err.to_string().starts_with("input size 42 is not supported"));
}

#[test]
fn valid_config_runs_every_strategy() {
    let config = RunConfig::from_sizes(&[100]).unwrap().with_iterations(1);
    let results = Runner::new(config).run();
    assert_eq!(results.len(), 8);
    assert!(results.iter().all(|m| m.size.get() == 100));
}

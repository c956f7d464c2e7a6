use gamma_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_install_is_rejected() {
    let _logger = Logger::builder()
        .name("gamma-first")
        .level(LevelFilter::WARN)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("gamma-second")
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
}

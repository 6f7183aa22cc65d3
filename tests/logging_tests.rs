use alexandria::init_logging;

#[test]
fn init_logging_is_idempotent() {
    init_logging();
    init_logging();
    log::warn!("logger installed once");
    assert!(log::max_level() >= log::LevelFilter::Error);
}

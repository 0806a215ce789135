use rtb::{Logger, Severity, SinkKind};
use std::fs;

// The global logger is shared by the whole test binary, so this file holds a
// single test.
#[test]
fn global_logger_routes_to_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let first = temp_dir.path().join("global1.log");
    let second = temp_dir.path().join("global2.log");

    let logger = Logger::global();
    assert_eq!(logger.sink_kind(Severity::Info), SinkKind::Stdout);

    logger.set_file_sink_path(&first);
    logger.set_info_sink(SinkKind::File);
    logger.set_warning_sink(SinkKind::File);
    logger.info_with(12.25f32, "Float value");
    logger.set_file_sink_path(&second);
    logger.warning_with(12, "int value");

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        "[Info] Float value: 12.25\n"
    );
    assert_eq!(
        fs::read_to_string(&second).unwrap(),
        "[Warning] int value: 12\n"
    );

    // Leave the process-wide logger as it was found.
    logger.set_info_sink(SinkKind::Stdout);
    logger.set_warning_sink(SinkKind::Stderr);
    assert_eq!(logger.config().info_sink, SinkKind::Stdout);
}

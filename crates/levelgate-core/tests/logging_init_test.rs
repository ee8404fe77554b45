use anyhow::Result;
use levelgate_core::logging::config::LoggingConfig;
use levelgate_core::logging::formatter::LogFormat;
use levelgate_core::{DisplayFlags, Fields, Severity};

// Installing a global subscriber can only happen once per process, so the
// whole lifecycle lives in one test.
#[test]
fn init_writes_accepted_records_to_file() -> Result<()> {
    let tmp_dir = tempfile::tempdir()?;
    let log_path = tmp_dir.path().join("logs/levelgate.log");

    let config = LoggingConfig::new(
        Severity::Warn,
        Some(log_path.clone()),
        false,
        LogFormat::Json,
    )
    .with_filter("trace")
    .with_flags(DisplayFlags::LEVEL);
    levelgate_core::init(config.clone())?;

    assert_eq!(levelgate_core::get_level(), Severity::Warn);
    assert_eq!(levelgate_core::std_logger().flags(), DisplayFlags::LEVEL);

    levelgate_core::info("router", "dispatch", "dropped by threshold", 7, &Fields::new());
    levelgate_core::warn(
        "router",
        "dispatch",
        "backend slow",
        8,
        &Fields::new().with("elapsed_ms", 1500),
    );

    let content = std::fs::read_to_string(&log_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1, "only the warn record should be written: {content}");

    let event: serde_json::Value = serde_json::from_str(lines[0])?;
    assert_eq!(event["level"], "WARN");
    assert_eq!(event["target"], "levelgate");
    assert!(event.get("timestamp").is_none());
    assert_eq!(event["fields"]["message"], "WARN");
    assert_eq!(event["fields"]["module"], "router");
    assert_eq!(event["fields"]["msg"], "backend slow");
    assert_eq!(event["fields"]["reqId"], 8);
    assert_eq!(event["fields"]["args"], r#"{"elapsed_ms":1500}"#);

    assert!(
        levelgate_core::init(config).is_err(),
        "second installation must be rejected"
    );
    Ok(())
}

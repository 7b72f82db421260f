use log::LevelFilter;
use retrieve_bankmail::logging::{parse_level, resolve_log_level};

#[test]
fn test_default_level_is_quiet() {
    assert_eq!(resolve_log_level(None, false, false), LevelFilter::Warn);
}

#[test]
fn test_verbose_selects_info() {
    assert_eq!(resolve_log_level(None, false, true), LevelFilter::Info);
}

#[test]
fn test_debug_overrides_verbose() {
    assert_eq!(resolve_log_level(None, true, true), LevelFilter::Debug);
    assert_eq!(resolve_log_level(None, true, false), LevelFilter::Debug);
}

#[test]
fn test_explicit_level_overrides_everything() {
    // --log-level wins over --debug and --verbose combined
    assert_eq!(
        resolve_log_level(Some("trace"), true, true),
        LevelFilter::Trace
    );
    assert_eq!(
        resolve_log_level(Some("error"), true, true),
        LevelFilter::Error
    );
}

#[test]
fn test_unknown_level_falls_back_through_ladder() {
    assert_eq!(
        resolve_log_level(Some("chatty"), true, false),
        LevelFilter::Debug
    );
    assert_eq!(
        resolve_log_level(Some("chatty"), false, true),
        LevelFilter::Info
    );
    assert_eq!(
        resolve_log_level(Some("chatty"), false, false),
        LevelFilter::Warn
    );
}

#[test]
fn test_parse_level_is_case_insensitive() {
    assert_eq!(parse_level("INFO"), Some(LevelFilter::Info));
    assert_eq!(parse_level("Warn"), Some(LevelFilter::Warn));
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level(" trace "), Some(LevelFilter::Trace));
    assert_eq!(parse_level("chatty"), None);
}

use clap::error::ErrorKind;
use clap::Parser;
use retrieve_bankmail::cli::Args;

#[test]
fn test_no_flags_defaults() {
    let args = Args::try_parse_from(["retrieve-bankmail"]).expect("Failed to parse empty args");

    assert!(!args.verbose);
    assert!(!args.debug);
    assert!(!args.show_browser);
    assert_eq!(args.limit, None);
    assert_eq!(args.log_level, None);
}

#[test]
fn test_all_flags_short_form() {
    let args = Args::try_parse_from(["retrieve-bankmail", "-v", "-d", "-s", "-l", "5", "-g", "trace"])
        .expect("Failed to parse short flags");

    assert!(args.verbose);
    assert!(args.debug);
    assert!(args.show_browser);
    assert_eq!(args.limit, Some(5));
    assert_eq!(args.log_level.as_deref(), Some("trace"));
}

#[test]
fn test_all_flags_long_form() {
    let args = Args::try_parse_from([
        "retrieve-bankmail",
        "--verbose",
        "--debug",
        "--show-browser",
        "--limit",
        "12",
        "--log-level",
        "info",
    ])
    .expect("Failed to parse long flags");

    assert!(args.verbose);
    assert!(args.debug);
    assert!(args.show_browser);
    assert_eq!(args.limit, Some(12));
    assert_eq!(args.log_level.as_deref(), Some("info"));
}

#[test]
fn test_limit_zero_rejected() {
    // Rejected at parse time, before any browser action
    let result = Args::try_parse_from(["retrieve-bankmail", "--limit", "0"]);
    assert!(result.is_err(), "--limit 0 should be a usage error");
    assert_ne!(result.unwrap_err().exit_code(), 0);
}

#[test]
fn test_limit_non_numeric_rejected() {
    let result = Args::try_parse_from(["retrieve-bankmail", "-l", "many"]);
    assert!(result.is_err(), "non-numeric --limit should be a usage error");
    assert_ne!(result.unwrap_err().exit_code(), 0);
}

#[test]
fn test_limit_negative_rejected() {
    let result = Args::try_parse_from(["retrieve-bankmail", "--limit", "-3"]);
    assert!(result.is_err(), "negative --limit should be a usage error");
}

#[test]
fn test_help_exits_zero() {
    let err = Args::try_parse_from(["retrieve-bankmail", "--help"])
        .expect_err("--help should short-circuit parsing");

    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert_eq!(err.exit_code(), 0);

    // The documented flags all appear in the usage text
    let usage = err.to_string();
    for flag in ["--verbose", "--debug", "--show-browser", "--limit", "--log-level"] {
        assert!(usage.contains(flag), "usage text should mention {}", flag);
    }
}

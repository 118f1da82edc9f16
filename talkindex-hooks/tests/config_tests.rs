use pretty_assertions::assert_eq;
use std::fs;
use talkindex_hooks::{
    CascadeConfig, FailurePolicy, HookError, HooksConfig, DEFAULT_MAX_DEPTH,
    DEFAULT_PAGE_PARAMETER, DEFAULT_SERVICE_ACCOUNT,
};
use talkindex_types::{NamespaceId, NS_TOPIC};

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn defaults() {
    let config = HooksConfig::default();
    assert_eq!(config.discussion_namespace, NS_TOPIC);
    assert_eq!(config.service_account, DEFAULT_SERVICE_ACCOUNT);
    assert_eq!(config.page_parameter, DEFAULT_PAGE_PARAMETER);
    assert_eq!(config.cascade.failure_policy, FailurePolicy::Isolate);
    assert_eq!(config.cascade.max_depth, DEFAULT_MAX_DEPTH);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_document_gives_defaults() {
    assert_eq!(HooksConfig::from_toml_str("").unwrap(), HooksConfig::default());
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn full_document_parses() {
    let config = HooksConfig::from_toml_str(
        r#"
[hooks]
discussion-namespace = 2700
service-account = "Thread Bot"
page-parameter = "title"

[cascade]
failure-policy = "abort"
max-depth = 3
"#,
    )
    .unwrap();

    assert_eq!(
        config,
        HooksConfig {
            discussion_namespace: NamespaceId(2700),
            service_account: "Thread Bot".to_string(),
            page_parameter: "title".to_string(),
            cascade: CascadeConfig {
                failure_policy: FailurePolicy::Abort,
                max_depth: 3,
            },
        }
    );
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = HooksConfig::from_toml_str("[cascade]\nmax-depth = 2\n").unwrap();
    assert_eq!(config.cascade.max_depth, 2);
    assert_eq!(config.cascade.failure_policy, FailurePolicy::Isolate);
    assert_eq!(config.service_account, DEFAULT_SERVICE_ACCOUNT);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = HooksConfig::from_toml_str("[hooks]\nservice_acount = \"x\"\n").unwrap_err();
    assert!(matches!(err, HookError::Toml(_)));

    let err = HooksConfig::from_toml_str("[cascade]\nretries = 3\n").unwrap_err();
    assert!(matches!(err, HookError::Toml(_)));

    let err = HooksConfig::from_toml_str("[jobs]\nenabled = false\n").unwrap_err();
    assert!(matches!(err, HookError::Toml(_)));
}

#[test]
fn unknown_failure_policy_is_rejected() {
    let err = HooksConfig::from_toml_str("[cascade]\nfailure-policy = \"retry\"\n").unwrap_err();
    assert!(matches!(err, HookError::Toml(_)));
}

// ── Validation ───────────────────────────────────────────────────

#[test]
fn zero_depth_is_invalid() {
    let err = HooksConfig::from_toml_str("[cascade]\nmax-depth = 0\n").unwrap_err();
    assert!(matches!(err, HookError::Config(_)));
}

#[test]
fn blank_service_account_is_invalid() {
    let config = HooksConfig {
        service_account: "  ".to_string(),
        ..HooksConfig::default()
    };
    assert!(matches!(config.validate(), Err(HookError::Config(_))));
}

#[test]
fn blank_page_parameter_is_invalid() {
    let config = HooksConfig {
        page_parameter: String::new(),
        ..HooksConfig::default()
    };
    assert!(matches!(config.validate(), Err(HookError::Config(_))));
}

// ── Loading from disk ────────────────────────────────────────────

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = HooksConfig::load_from(dir.path().join("talkindex.toml"));
    assert_eq!(config, HooksConfig::default());
}

#[test]
fn valid_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talkindex.toml");
    fs::write(&path, "[hooks]\nservice-account = \"Thread Bot\"\n").unwrap();

    let config = HooksConfig::load_from(&path);

    assert_eq!(config.service_account, "Thread Bot");
}

#[test]
fn invalid_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talkindex.toml");
    fs::write(&path, "this is = = not toml").unwrap();

    assert_eq!(HooksConfig::load_from(&path), HooksConfig::default());
}

#[test]
fn file_failing_validation_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talkindex.toml");
    fs::write(&path, "[cascade]\nmax-depth = 0\n").unwrap();

    assert_eq!(HooksConfig::load_from(&path), HooksConfig::default());
}

#[test]
fn unreadable_path_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists but cannot be read as a file.
    assert_eq!(HooksConfig::load_from(dir.path()), HooksConfig::default());
}

#[test]
fn strict_load_reports_unreadable_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = HooksConfig::try_load_from(dir.path()).unwrap_err();
    assert!(matches!(err, HookError::Io(_)));
}

#[test]
fn strict_load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = HooksConfig::try_load_from(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, HookError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}

#[test]
fn strict_load_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talkindex.toml");
    fs::write(&path, "[cascade]\nmax-depth = \"deep\"\n").unwrap();

    assert!(matches!(HooksConfig::try_load_from(&path), Err(HookError::Toml(_))));
}

#[test]
fn strict_load_reads_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talkindex.toml");
    fs::write(&path, "[cascade]\nfailure-policy = \"abort\"\n").unwrap();

    let config = HooksConfig::try_load_from(&path).unwrap();

    assert_eq!(config.cascade.failure_policy, FailurePolicy::Abort);
}

// ── Logging ──────────────────────────────────────────────────────

#[test]
fn init_tracing_only_installs_once() {
    let _ = talkindex_hooks::logging::init_tracing(true);
    assert!(!talkindex_hooks::logging::init_tracing(false));
}

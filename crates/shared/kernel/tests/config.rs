use gamma_domain::config::{AppConfig, DEFAULT_GRAPHQL_ENDPOINT, MergePolicy, Side};
use gamma_kernel::config::load_config;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn missing_default_file_yields_defaults() {
    let cfg: AppConfig = load_config(None::<&str>).unwrap();

    assert_eq!(cfg.graphql.endpoint, DEFAULT_GRAPHQL_ENDPOINT);
    assert_eq!(cfg.registry.merge_policy, MergePolicy::Strict);
    assert_eq!(cfg.server.port, 3080);
}

#[test]
#[serial]
fn explicit_file_must_exist() {
    let dir = tempdir().unwrap();
    let result = load_config::<AppConfig>(Some(dir.path().join("absent.toml")));
    assert!(result.is_err());
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[graphql]
endpoint = "http://file.test/graphql"
browser_endpoint = "https://public.test/graphql"

[registry]
merge_policy = "last_wins"
"#,
    )
    .unwrap();

    let cfg = load_config::<AppConfig>(Some(&path)).unwrap();

    assert_eq!(cfg.graphql.endpoint_for(Side::Server), "http://file.test/graphql");
    assert_eq!(cfg.graphql.endpoint_for(Side::Browser), "https://public.test/graphql");
    assert_eq!(cfg.registry.merge_policy, MergePolicy::LastWins);
}

//! Configuration loading tests.

use catalog_server::{CatalogConfig, StoreBackend};
use std::io::Write;

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn explicit_file_overrides_defaults() {
    let file = toml_file(
        r#"
[server]
port = 9090

[store]
seed_file = "seed.json"
"#,
    );

    let config = CatalogConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.server().port(), 9090);
    assert_eq!(config.server().host(), "127.0.0.1");
    assert_eq!(
        config.store().seed_file().as_deref(),
        Some(std::path::Path::new("seed.json"))
    );
    assert_eq!(*config.store().backend(), StoreBackend::Memory);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = CatalogConfig::load(Some(std::path::Path::new("/nonexistent/catalog.toml")))
        .unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn from_file_reads_a_complete_config() {
    let file = toml_file(
        r#"
[server]
host = "0.0.0.0"
port = 8000

[store]
backend = "postgres"
database_url = "postgres://localhost/catalog"

[logging]
level = "debug"
json = true
"#,
    );

    let config = CatalogConfig::from_file(file.path()).unwrap();
    assert_eq!(config.server().bind_address(), "0.0.0.0:8000");
    assert_eq!(*config.store().backend(), StoreBackend::Postgres);
    assert_eq!(*config.store().pool_size(), 10);
    assert!(*config.store().run_migrations());
    assert!(*config.logging().json());
}

#[test]
fn unknown_backend_is_rejected() {
    let file = toml_file(
        r#"
[server]
host = "0.0.0.0"
port = 8000

[store]
backend = "sqlite"

[logging]
level = "info"
"#,
    );

    assert!(CatalogConfig::from_file(file.path()).is_err());
}

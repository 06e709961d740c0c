//! Tests for the portal configuration loader.

use satudata_client::PortalConfig;
use std::io::Write;

#[test]
fn test_bundled_defaults_cover_every_portal_resource() {
    let config = PortalConfig::bundled().unwrap();

    for name in ["opd", "urusan", "buku", "akun_kepala_dinas", "trx_sektoral", "users"] {
        let endpoints = config.endpoints(name).unwrap();
        assert!(endpoints.list().starts_with('/'), "{} list path", name);
    }

    assert_eq!(*config.timeout_secs(), 30);
    assert_eq!(
        config.endpoints("akun_kepala_dinas").unwrap().status().as_deref(),
        Some("/akun-kepala-dinas/{id}/status")
    );
}

#[test]
fn test_unknown_resource_is_an_error() {
    let config = PortalConfig::bundled().unwrap();
    let err = config.endpoints("parks").unwrap_err();
    assert!(err.to_string().contains("Unknown resource: parks"));
}

#[test]
fn test_file_overrides_bundled_values() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
base_url = "https://data.kab.go.id/api"
timeout_secs = 5

[resources.opd]
list = "/v2/opd"
"#
    )
    .unwrap();

    let config = PortalConfig::from_file(file.path()).unwrap();
    assert_eq!(config.base_url(), "https://data.kab.go.id/api");
    assert_eq!(*config.timeout_secs(), 5);
    assert_eq!(config.endpoints("opd").unwrap().list(), "/v2/opd");
    assert!(config.endpoints("urusan").is_ok());
    assert_eq!(config.url_for("/v2/opd"), "https://data.kab.go.id/api/v2/opd");
}

#[test]
fn test_missing_file_is_an_error() {
    let result = PortalConfig::from_file("/definitely/not/here/satudata.toml");
    assert!(result.is_err());
}

#[test]
fn test_setters_override_fields() {
    let config = PortalConfig::default()
        .with_base_url("http://127.0.0.1:9000")
        .with_token(Some("abc".to_string()));
    assert_eq!(config.base_url(), "http://127.0.0.1:9000");
    assert_eq!(config.token().as_deref(), Some("abc"));
}

#[test]
fn test_session_follows_configured_token() {
    let anonymous = PortalConfig::default().session();
    assert!(anonymous.token().is_none());

    let signed_in = PortalConfig::default()
        .with_token(Some("secret".to_string()))
        .session();
    assert_eq!(signed_in.token(), Some("secret"));
}

//! End-to-end tests of the portal facade over a recording transport.

use async_trait::async_trait;
use satudata::{
    Confirmation, HttpRequest, HttpResponse, LifecycleStatus, Method, NewAkunBuilder, Portal,
    PortalConfig, SatuDataResult, Session, StatusChange, Transport,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Answers GETs with a fixed list and everything else with `{success: true}`.
struct RecordingTransport {
    list: Value,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    fn new(list: Value) -> Self {
        Self {
            list,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(Method, String)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| (*r.method(), r.path().clone()))
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> SatuDataResult<HttpResponse> {
        let body = match request.method() {
            Method::Get => self.list.clone(),
            _ => json!({"success": true, "message": "Berhasil"}),
        };
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse::from_json(200, &body))
    }
}

fn portal(transport: Arc<RecordingTransport>) -> anyhow::Result<Portal> {
    Ok(Portal::with_transport(
        PortalConfig::bundled()?,
        transport,
        Arc::new(Session::with_token("secret")),
    ))
}

#[tokio::test]
async fn test_controllers_use_configured_list_paths() -> anyhow::Result<()> {
    let transport = Arc::new(RecordingTransport::new(json!({"data": []})));
    let portal = portal(Arc::clone(&transport))?;

    portal.opd()?.load().await;
    portal.urusan()?.load().await;
    portal.buku()?.load().await;
    portal.akun_kepala_dinas()?.load().await;
    portal.trx_sektoral()?.load().await;
    portal.users()?.load().await;

    let paths: Vec<String> = transport.calls().into_iter().map(|(_, p)| p).collect();
    assert_eq!(
        paths,
        [
            "/opd",
            "/urusan",
            "/buku",
            "/akun-kepala-dinas",
            "/trx-sektoral",
            "/users"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_unconfigured_resource_is_an_error() -> anyhow::Result<()> {
    let portal = Portal::with_transport(
        PortalConfig::default(),
        Arc::new(RecordingTransport::new(json!([]))),
        Arc::new(Session::anonymous()),
    );
    let err = portal.opd().unwrap_err();
    assert!(err.to_string().contains("Unknown resource: opd"));
    Ok(())
}

#[tokio::test]
async fn test_account_lifecycle() -> anyhow::Result<()> {
    let transport = Arc::new(RecordingTransport::new(json!({"hasil": [
        {"id": 5, "full_name": "Siti Rahma", "email": "siti@kab.go.id", "is_active": false}
    ]})));
    let portal = portal(Arc::clone(&transport))?;
    let akun = portal.akun_kepala_dinas()?;

    assert_eq!(akun.load().await, LifecycleStatus::Ready);
    assert_eq!(akun.count_value("status", "inactive")?, 1);

    let result = akun.set_status(&5, &StatusChange::activate()).await;
    assert!(result.success);
    assert_eq!(result.message, "Berhasil");

    let invalid = NewAkunBuilder::default()
        .full_name("Budi")
        .email("budi")
        .username("budi")
        .nama_opd("Dinas Pendidikan")
        .build()?;
    let rejected = akun.create(&invalid).await;
    assert!(!rejected.success);

    let cancelled = akun.delete(&5, Confirmation::Cancelled).await;
    assert!(!cancelled.success);

    assert_eq!(
        transport.calls(),
        [
            (Method::Get, "/akun-kepala-dinas".to_string()),
            (Method::Put, "/akun-kepala-dinas/5/status".to_string()),
            (Method::Get, "/akun-kepala-dinas".to_string()),
        ]
    );
    Ok(())
}

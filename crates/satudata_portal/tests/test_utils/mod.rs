//! Test utilities for portal resource tests.

#![allow(dead_code)]

use async_trait::async_trait;
use satudata_core::Resource;
use satudata_error::SatuDataResult;
use satudata_interface::{HttpRequest, HttpResponse, Session, Transport};
use satudata_resource::{ResourceController, ResourceSpec};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Transport serving fixed bodies per path, recording every request.
#[derive(Default)]
pub struct FixtureTransport {
    bodies: HashMap<String, Value>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for any method on `path`.
    pub fn serve(mut self, path: &str, body: Value) -> Self {
        self.bodies.insert(path.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn send(&self, request: HttpRequest) -> SatuDataResult<HttpResponse> {
        let body = self.bodies.get(request.path()).cloned();
        self.requests.lock().unwrap().push(request);
        Ok(match body {
            Some(body) => HttpResponse::from_json(200, &body),
            None => HttpResponse::from_json(404, &json!({"message": "Not Found"})),
        })
    }
}

/// Build a loaded controller over a fixture transport.
pub async fn loaded<T: Resource>(
    spec: ResourceSpec<T>,
    transport: Arc<FixtureTransport>,
) -> ResourceController<T> {
    let controller = ResourceController::new(spec, transport, Arc::new(Session::anonymous()));
    controller.load().await;
    controller
}

pub fn urusan_json() -> Value {
    json!({"data": [
        {"id": 1, "kode_urusan": "1.01", "nama_urusan": "Pendidikan"},
        {"id": 2, "kode_urusan": "1.02", "nama_urusan": "Kesehatan"},
        {"id": 3, "kode_urusan": "2.07", "nama_urusan": "Tenaga Kerja"},
        {"id": 4, "kode_urusan": "3.25", "nama_urusan": "Kelautan dan Perikanan"},
        {"id": 5, "kode_urusan": "", "nama_urusan": "Belum Diklasifikasi"},
        {"id": 6, "kode_urusan": "1.03", "nama_urusan": "Pekerjaan Umum"}
    ]})
}

pub fn akun_json() -> Value {
    json!({"hasil": [
        {"id": 1, "full_name": "Siti Rahma", "email": "siti@kab.go.id", "username": "siti", "nama_opd": "Dinas Kesehatan", "is_active": true, "created_at": "2024-03-01 08:00:00"},
        {"id": "2", "full_name": "Budi Santoso", "email": "budi@kab.go.id", "username": "budi", "nama_opd": "Dinas Pendidikan", "is_active": 0},
        {"id": 3, "full_name": "Agus Salim", "email": "agus@kab.go.id", "nama_opd": "Dinas Kesehatan", "is_active": "1"}
    ]})
}

pub fn trx_json() -> Value {
    json!({"result": [
        {"id": 10, "uraian": "Jumlah puskesmas", "tahun": 2024, "nilai": 12, "satuan": "unit", "nama_opd": "Dinas Kesehatan", "kode_urusan": "1.02", "status": "verified"},
        {"id": 11, "uraian": "Angka partisipasi sekolah", "tahun": "2023", "nilai": "97.5", "satuan": "persen", "nama_opd": "Dinas Pendidikan", "kode_urusan": "1.01", "status": "draft"},
        {"id": 12, "uraian": "Produksi ikan", "tahun": 2024, "nilai": 1530.2, "satuan": "ton", "nama_opd": "Dinas Perikanan", "kode_urusan": "3.25", "status": "verified"},
        {"id": 13, "uraian": "Pencari kerja", "tahun": 2022, "satuan": "orang", "nama_opd": "Dinas Tenaga Kerja"}
    ]})
}

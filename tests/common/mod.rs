//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_geo;

use async_trait::async_trait;
use location_picker::geo::{GeoError, GeoLookupService, Municipality, Subdivision};
use std::collections::HashMap;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Fixtures -----------------------------------------------------------------

pub fn acre_and_sao_paulo() -> Vec<Subdivision> {
    // Deliberately unsorted
    vec![
        Subdivision::new(2, "São Paulo", "SP"),
        Subdivision::new(1, "Acre", "AC"),
    ]
}

pub const SUBDIVISIONS_JSON: &str = r#"[
    {"id": 35, "sigla": "SP", "nome": "São Paulo", "regiao": {"id": 3, "sigla": "SE", "nome": "Sudeste"}},
    {"id": 12, "sigla": "AC", "nome": "Acre", "regiao": {"id": 1, "sigla": "N", "nome": "Norte"}},
    {"id": 33, "sigla": "RJ", "nome": "Rio de Janeiro", "regiao": {"id": 3, "sigla": "SE", "nome": "Sudeste"}}
]"#;

pub const SP_MUNICIPALITIES_JSON: &str = r#"[
    {"id": 3549904, "nome": "São José dos Campos"},
    {"id": 3500105, "nome": "Adamantina"},
    {"id": 3509502, "nome": "Campinas"}
]"#;

// -- In-memory service --------------------------------------------------------

/// `GeoLookupService` backed by fixed data. Records every call and can delay
/// individual municipality lookups to force out-of-order completion.
#[derive(Default)]
pub struct StaticGeoService {
    pub subdivisions: Vec<Subdivision>,
    pub municipalities: HashMap<String, Vec<Municipality>>,
    pub delays: HashMap<String, Duration>,
    pub fail_subdivisions: bool,
    pub calls: Mutex<Vec<String>>,
}

impl StaticGeoService {
    pub fn scenario() -> Self {
        let mut municipalities = HashMap::new();
        municipalities.insert(
            "SP".to_string(),
            vec![
                Municipality::new(11, "São José dos Campos"),
                Municipality::new(10, "Campinas"),
            ],
        );
        municipalities.insert(
            "AC".to_string(),
            vec![
                Municipality::new(21, "Rio Branco"),
                Municipality::new(20, "Cruzeiro do Sul"),
            ],
        );
        Self {
            subdivisions: acre_and_sao_paulo(),
            municipalities,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, code: &str, delay: Duration) -> Self {
        self.delays.insert(code.to_string(), delay);
        self
    }

    /// Calls made so far: "subdivisions" or "municipalities:<code>".
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeoLookupService for StaticGeoService {
    async fn list_subdivisions(&self) -> Result<Vec<Subdivision>, GeoError> {
        self.calls.lock().unwrap().push("subdivisions".to_string());
        if self.fail_subdivisions {
            return Err(GeoError::Status {
                endpoint: "static://estados".to_string(),
                status: 503,
            });
        }
        Ok(self.subdivisions.clone())
    }

    async fn list_municipalities(
        &self,
        subdivision_code: &str,
    ) -> Result<Vec<Municipality>, GeoError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("municipalities:{subdivision_code}"));
        if let Some(delay) = self.delays.get(subdivision_code) {
            tokio::time::sleep(*delay).await;
        }
        Ok(self
            .municipalities
            .get(subdivision_code)
            .cloned()
            .unwrap_or_default())
    }
}

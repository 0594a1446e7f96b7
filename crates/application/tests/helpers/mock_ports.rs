#![allow(dead_code)]

use async_trait::async_trait;
use dns_survey_application::ports::{HostLookup, NameserverDirectory};
use dns_survey_domain::{FetchError, LookupError, NameserverEntry};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn entry(ip: &str, name: &str) -> NameserverEntry {
    serde_json::from_str(&format!(
        r#"{{"ip":"{}","name":"{}","city":"Test City","country_id":"US","dnssec":false,"reliability":0.9}}"#,
        ip, name
    ))
    .unwrap()
}

// ============================================================================
// Mock NameserverDirectory
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDirectory {
    entries: Arc<RwLock<Vec<NameserverEntry>>>,
    should_fail: Arc<RwLock<bool>>,
    fetch_count: Arc<RwLock<usize>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_entries(&self, entries: Vec<NameserverEntry>) {
        *self.entries.write().await = entries;
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn fetch_count(&self) -> usize {
        *self.fetch_count.read().await
    }
}

#[async_trait]
impl NameserverDirectory for MockDirectory {
    async fn fetch(&self, _region: &str) -> Result<Vec<NameserverEntry>, FetchError> {
        *self.fetch_count.write().await += 1;
        if *self.should_fail.read().await {
            return Err(FetchError::Malformed("Mock directory failed".to_string()));
        }
        Ok(self.entries.read().await.clone())
    }
}

// ============================================================================
// Mock HostLookup
// ============================================================================

#[derive(Clone, Default)]
pub struct MockLookup {
    answers: Arc<RwLock<HashMap<IpAddr, Vec<IpAddr>>>>,
    failing: Arc<RwLock<Vec<IpAddr>>>,
    queried: Arc<RwLock<Vec<SocketAddr>>>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the answer a specific upstream server returns.
    pub async fn set_answer(&self, server: IpAddr, addresses: Vec<IpAddr>) {
        self.answers.write().await.insert(server, addresses);
    }

    /// Configure a server whose lookups fail with a timeout.
    pub async fn set_failing(&self, server: IpAddr) {
        self.failing.write().await.push(server);
    }

    /// Which servers were queried, in order.
    pub async fn queried(&self) -> Vec<SocketAddr> {
        self.queried.read().await.clone()
    }
}

#[async_trait]
impl HostLookup for MockLookup {
    async fn lookup(&self, _host: &str, server: SocketAddr) -> Result<Vec<IpAddr>, LookupError> {
        self.queried.write().await.push(server);
        if self.failing.read().await.contains(&server.ip()) {
            return Err(LookupError::QueryTimeout);
        }
        Ok(self
            .answers
            .read()
            .await
            .get(&server.ip())
            .cloned()
            .unwrap_or_default())
    }
}

//! Challan notification dispatch
//!
//! Issuing a challan notifies the bike owner by email through an HTTP
//! mail relay. Delivery is best-effort and fire-and-forget: a relay
//! outage never fails the issuing request.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

/// What the owner is told about a freshly issued challan.
#[derive(Debug, Clone, Serialize)]
pub struct ChallanNotice {
    pub to_email: String,
    pub bike_number: String,
    pub rule_name: String,
    pub amount: String,
    pub due_date: String,
    pub challan_id: i64,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notice: ChallanNotice) -> Result<(), String>;
}

/// Posts the notice to an HTTP mail relay.
pub struct RelayNotifier {
    client: reqwest::Client,
    relay_url: String,
    from: String,
}

impl RelayNotifier {
    pub fn new(relay_url: String, from: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url,
            from,
        }
    }
}

#[async_trait]
impl Notifier for RelayNotifier {
    async fn send(&self, notice: ChallanNotice) -> Result<(), String> {
        let body = serde_json::json!({
            "from": self.from,
            "to": notice.to_email,
            "subject": format!("Traffic challan issued for bike {}", notice.bike_number),
            "body": format!(
                "A challan (ref {}) has been issued against bike {} for '{}'. \
                 Fine: {}. Due date: {}.",
                notice.challan_id,
                notice.bike_number,
                notice.rule_name,
                notice.amount,
                notice.due_date,
            ),
        });

        let response = self
            .client
            .post(&self.relay_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("mail relay unreachable: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("mail relay returned {}", response.status()));
        }
        Ok(())
    }
}

/// No relay configured: the notice is only logged.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notice: ChallanNotice) -> Result<(), String> {
        info!(
            challan_id = notice.challan_id,
            to = %notice.to_email,
            bike = %notice.bike_number,
            "Challan notice (no mail relay configured)"
        );
        Ok(())
    }
}

/// Fire-and-forget dispatch; failures are logged, never propagated.
pub fn dispatch(notifier: std::sync::Arc<dyn Notifier>, notice: ChallanNotice) {
    tokio::spawn(async move {
        let challan_id = notice.challan_id;
        if let Err(e) = notifier.send(notice).await {
            error!(challan_id, error = %e, "Failed to deliver challan notice");
        }
    });
}

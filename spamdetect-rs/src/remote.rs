//! Remote-first classification with local fallback
//!
//! Posts messages to a remote scoring service when one is configured and
//! falls back to the in-process pattern engine on any failure, so callers
//! always receive a result.

use std::time::Duration;

use tracing::warn;

use crate::api::handlers::{HealthResponse, PredictRequest, PredictResponse};
use crate::config::RemoteConfig;
use crate::detection::{DetectionResult, SpamDetector};
use crate::error::Result;

pub struct RemoteDetector {
    client: reqwest::Client,
    base_url: Option<String>,
    local: SpamDetector,
}

impl RemoteDetector {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            local: SpamDetector::new()?,
        })
    }

    /// Classify a message, never failing: remote errors degrade to the
    /// local pattern engine
    pub async fn classify(&self, subject: &str, content: &str) -> DetectionResult {
        if let Some(base_url) = &self.base_url {
            match self.classify_remote(base_url, subject, content).await {
                Ok(result) => return result,
                Err(e) => {
                    warn!(error = %e, "remote scoring unavailable, using pattern engine");
                }
            }
        }

        self.local.classify(subject, content)
    }

    async fn classify_remote(
        &self,
        base_url: &str,
        subject: &str,
        content: &str,
    ) -> Result<DetectionResult> {
        let request = PredictRequest {
            subject: subject.to_string(),
            content: content.to_string(),
        };

        let response: PredictResponse = self
            .client
            .post(format!("{}/api/predict", base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.into())
    }

    /// Probe the remote scoring service
    pub async fn remote_healthy(&self) -> bool {
        let Some(base_url) = &self.base_url else {
            return false;
        };

        let response = match self
            .client
            .get(format!("{}/api/health", base_url))
            .send()
            .await
        {
            Ok(response) => response,
            Err(_) => return false,
        };

        if !response.status().is_success() {
            return false;
        }

        match response.json::<HealthResponse>().await {
            Ok(health) => health.status == "running" && health.models_loaded,
            Err(_) => false,
        }
    }
}

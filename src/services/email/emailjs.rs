use anyhow::Context;
use async_trait::async_trait;

use super::{EmailProvider, TemplateParams};
use crate::config::EmailJsConfig;

const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub struct EmailJsProvider {
    config: EmailJsConfig,
    client: reqwest::Client,
}

impl EmailJsProvider {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EmailProvider for EmailJsProvider {
    async fn send(&self, params: &TemplateParams) -> anyhow::Result<()> {
        let body = serde_json::json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": params,
        });

        self.client
            .post(SEND_URL)
            .json(&body)
            .send()
            .await
            .context("failed to reach EmailJS")?
            .error_for_status()
            .context("EmailJS API returned error")?;

        Ok(())
    }
}

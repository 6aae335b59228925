pub mod emailjs;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::ClinicConfig;
use crate::models::AppointmentRequest;
use crate::services::formatting;

/// Placeholder when the visitor left the message field blank.
pub const DEFAULT_MESSAGE: &str = "No additional message";

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, params: &TemplateParams) -> anyhow::Result<()>;
}

/// Flat named values the hosted email template interpolates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub to_email: String,
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub service: String,
    pub message: String,
    pub clinic_name: String,
    pub doctor_name: String,
}

impl TemplateParams {
    pub fn build(request: &AppointmentRequest, config: &ClinicConfig) -> Self {
        Self {
            to_email: config.to_email.clone(),
            from_name: request.name.clone(),
            from_email: request.email.clone(),
            phone: request.phone.clone(),
            appointment_date: formatting::long_date(request.date),
            appointment_time: formatting::time_12h(request.time),
            service: request.service.label().to_string(),
            message: request
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            clinic_name: config.clinic_name.clone(),
            doctor_name: config.doctor_name.clone(),
        }
    }
}

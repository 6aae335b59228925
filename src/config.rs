use std::env;

use chrono::Weekday;

/// Clinic identity and booking rules used for validation and the
/// outgoing notification email.
#[derive(Clone, Debug)]
pub struct ClinicConfig {
    pub clinic_name: String,
    pub doctor_name: String,
    /// Destination address for appointment request emails.
    pub to_email: String,
    /// WhatsApp number for the pre-filled summary link, digits with
    /// country code. An empty number still yields a link, just one with
    /// no recipient.
    pub whatsapp_number: String,
    pub closed_day: Weekday,
    /// Appointments are accepted for hours in `open_hour..close_hour`.
    pub open_hour: u32,
    pub close_hour: u32,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            clinic_name: "Sri Sai Specialty Dental Clinic".to_string(),
            doctor_name: "Dr. Anitha".to_string(),
            to_email: "testingkiro@gmail.com".to_string(),
            whatsapp_number: String::new(),
            closed_day: Weekday::Sun,
            open_hour: 16,
            close_hour: 20,
        }
    }
}

impl ClinicConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            clinic_name: env::var("CLINIC_NAME").unwrap_or(defaults.clinic_name),
            doctor_name: env::var("CLINIC_DOCTOR_NAME").unwrap_or(defaults.doctor_name),
            to_email: env::var("CLINIC_TO_EMAIL").unwrap_or(defaults.to_email),
            whatsapp_number: env::var("CLINIC_WHATSAPP_NUMBER").unwrap_or_default(),
            closed_day: env::var("CLINIC_CLOSED_DAY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(Weekday::Sun),
            open_hour: env::var("CLINIC_OPEN_HOUR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(16),
            close_hour: env::var("CLINIC_CLOSE_HOUR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
        }
    }
}

/// EmailJS account coordinates: which hosted service and template the
/// appointment emails go through.
#[derive(Clone, Debug)]
pub struct EmailJsConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            public_key: "0TZg_S2PMqbCnGr28".to_string(),
            service_id: "service_xzz0lcn".to_string(),
            template_id: "template_ckn8f1f".to_string(),
        }
    }
}

impl EmailJsConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            public_key: env::var("EMAILJS_PUBLIC_KEY").unwrap_or(defaults.public_key),
            service_id: env::var("EMAILJS_SERVICE_ID").unwrap_or(defaults.service_id),
            template_id: env::var("EMAILJS_TEMPLATE_ID").unwrap_or(defaults.template_id),
        }
    }
}

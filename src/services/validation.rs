use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::ClinicConfig;
use crate::errors::ValidationError;
use crate::models::{AppointmentForm, AppointmentRequest, Service};
use crate::services::formatting;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap();
}

/// Checks the raw form against the booking rules and produces the
/// validated request. Checks run in order and the first failure wins;
/// a request that fails any check is never constructed.
pub fn validate(
    form: &AppointmentForm,
    today: NaiveDate,
    config: &ClinicConfig,
) -> Result<AppointmentRequest, ValidationError> {
    let required: [(&'static str, &str); 6] = [
        ("name", form.name.as_str()),
        ("email", form.email.as_str()),
        ("phone", form.phone.as_str()),
        ("date", form.date.as_str()),
        ("time", form.time.as_str()),
        ("service", form.service.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField { field });
        }
    }

    let email = form.email.trim();
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let phone: String = form.phone.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_RE.is_match(&phone) {
        return Err(ValidationError::InvalidPhone);
    }

    let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate)?;
    if date < today {
        return Err(ValidationError::PastDate);
    }
    if is_closed_day(date, config) {
        return Err(ValidationError::ClosedDay {
            day: formatting::weekday_name(config.closed_day),
        });
    }

    let time = NaiveTime::parse_from_str(form.time.trim(), "%H:%M")
        .map_err(|_| ValidationError::InvalidTime)?;
    if time.hour() < config.open_hour || time.hour() >= config.close_hour {
        return Err(ValidationError::OutOfHours {
            open: formatting::hour_12h(config.open_hour),
            close: formatting::hour_12h(config.close_hour),
        });
    }

    let message = match form.message.trim() {
        "" => None,
        m => Some(m.to_string()),
    };

    Ok(AppointmentRequest {
        name: form.name.trim().to_string(),
        email: email.to_string(),
        phone,
        date,
        time,
        service: Service::from_code(form.service.trim()),
        message,
    })
}

pub fn is_closed_day(date: NaiveDate, config: &ClinicConfig) -> bool {
    date.weekday() == config.closed_day
}

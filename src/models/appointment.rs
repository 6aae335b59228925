use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use super::Service;

/// Raw form fields as they come off the submit event: a mapping from
/// field name to string value. Nothing here is trusted yet; fields a
/// host never collected deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

/// A fully validated appointment request. Only `validation::validate`
/// constructs one, so a partially valid request never exists and anything
/// holding this type may build a send payload from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub name: String,
    pub email: String,
    /// Normalized: internal whitespace stripped.
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub service: Service,
    pub message: Option<String>,
}

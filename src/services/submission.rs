use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::config::ClinicConfig;
use crate::errors::{SubmitError, ValidationError};
use crate::models::{AppointmentForm, AppointmentRequest, NotificationKind};
use crate::services::email::{EmailProvider, TemplateParams};
use crate::services::formatting;
use crate::services::notify::Notifier;
use crate::services::validation;

/// Host-side form controls the pipeline drives: the busy state of the
/// submit control, and clearing the fields after a successful send.
pub trait FormUi: Send + Sync {
    fn set_submitting(&self, submitting: bool);
    fn reset(&self);
}

#[derive(Debug)]
pub struct SubmissionReceipt {
    pub request: AppointmentRequest,
    /// Pre-filled wa.me summary link. Built for manual forwarding;
    /// nothing opens it automatically.
    pub whatsapp_url: String,
}

/// The appointment request pipeline: validate, format, send through the
/// email provider, and feed the outcome back through the notifier. All
/// collaborators are injected so hosts and tests can substitute them.
pub struct SubmissionPipeline {
    config: ClinicConfig,
    email: Box<dyn EmailProvider>,
    notifier: Arc<dyn Notifier>,
    ui: Box<dyn FormUi>,
    in_flight: AtomicBool,
}

impl SubmissionPipeline {
    pub fn new(
        config: ClinicConfig,
        email: Box<dyn EmailProvider>,
        notifier: Arc<dyn Notifier>,
        ui: Box<dyn FormUi>,
    ) -> Self {
        Self {
            config,
            email,
            notifier,
            ui,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Runs one submission attempt end to end. Every outcome has already
    /// been surfaced through the notifier by the time this returns; the
    /// `Result` is for hosts that want to react beyond that.
    pub async fn submit(&self, form: &AppointmentForm) -> Result<SubmissionReceipt, SubmitError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            let err = SubmitError::InFlight;
            self.notifier.show(NotificationKind::Error, &err.to_string());
            return Err(err);
        }
        let _in_flight = ReleaseOnDrop {
            flag: &self.in_flight,
        };

        let today = Local::now().date_naive();
        let request = match validation::validate(form, today, &self.config) {
            Ok(request) => request,
            Err(e) => {
                self.notifier.show(NotificationKind::Error, &e.to_string());
                return Err(e.into());
            }
        };

        // Busy from here until return, success or not.
        let _busy = BusyGuard::engage(self.ui.as_ref());

        let params = TemplateParams::build(&request, &self.config);
        match self.email.send(&params).await {
            Ok(()) => {
                self.notifier.show(
                    NotificationKind::Success,
                    &format!(
                        "Thank you for your appointment request! {} will contact you soon to confirm your appointment.",
                        self.config.doctor_name
                    ),
                );
                self.ui.reset();

                let whatsapp_url = whatsapp_link(&self.config.whatsapp_number, &request);
                tracing::debug!(url = %whatsapp_url, "prepared WhatsApp summary link");

                Ok(SubmissionReceipt {
                    request,
                    whatsapp_url,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "appointment email send failed");
                let err = SubmitError::Send(e);
                self.notifier.show(NotificationKind::Error, &err.to_string());
                Err(err)
            }
        }
    }

    /// Live check for the date field, mirroring the submit-time rule for
    /// the closed weekday. Returns `false` when the host should clear
    /// the field; unparseable input is left for submit-time validation.
    pub fn precheck_date(&self, raw: &str) -> bool {
        let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") else {
            return true;
        };
        if validation::is_closed_day(date, &self.config) {
            let day = formatting::weekday_name(self.config.closed_day);
            self.notifier.show(
                NotificationKind::Error,
                &ValidationError::ClosedDay { day }.to_string(),
            );
            return false;
        }
        true
    }
}

struct ReleaseOnDrop<'a> {
    flag: &'a AtomicBool,
}

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

struct BusyGuard<'a> {
    ui: &'a dyn FormUi,
}

impl<'a> BusyGuard<'a> {
    fn engage(ui: &'a dyn FormUi) -> Self {
        ui.set_submitting(true);
        Self { ui }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.ui.set_submitting(false);
    }
}

/// Pre-filled WhatsApp deep link carrying the request summary.
pub fn whatsapp_link(number: &str, request: &AppointmentRequest) -> String {
    let summary = format!(
        "New Appointment Request:\nName: {}\nPhone: {}\nEmail: {}\nDate: {}\nTime: {}\nService: {}\nMessage: {}",
        request.name,
        request.phone,
        request.email,
        request.date,
        request.time.format("%H:%M"),
        request.service.code(),
        request.message.as_deref().unwrap_or("None"),
    );
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(&summary))
}

pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use config::{ClinicConfig, EmailJsConfig};
pub use errors::{SubmitError, ValidationError};
pub use models::{AppointmentForm, AppointmentRequest, Notification, NotificationKind, Service};
pub use services::email::{EmailProvider, TemplateParams};
pub use services::notify::{NotificationCenter, Notifier};
pub use services::submission::{FormUi, SubmissionPipeline, SubmissionReceipt};

pub mod appointment;
pub mod notification;
pub mod service;

pub use appointment::{AppointmentForm, AppointmentRequest};
pub use notification::{Notification, NotificationKind};
pub use service::Service;

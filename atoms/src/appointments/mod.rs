pub mod http;
pub mod model;
pub mod service;

pub use model::{Appointment, CreateAppointmentPayload, UpdateAppointmentPayload};
pub use service::*;
pub use http::*;

use serde::{Deserialize, Serialize};

/// Appointment domain model - a booking request from the public site
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Appointment {
    pub appointment_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Requested service, free-form ("dent repair", "full respray", ...)
    pub service: String,
    pub vehicle: Option<String>,
    pub preferred_date: Option<String>,
    pub message: Option<String>,
    pub status: String, // "pending" | "confirmed" | "completed" | "cancelled"
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentPayload {
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub vehicle: Option<String>,
    pub preferred_date: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentPayload {
    pub status: Option<String>,
    pub preferred_date: Option<String>,
    pub message: Option<String>,
}

pub const APPOINTMENT_STATUSES: [&str; 4] = ["pending", "confirmed", "completed", "cancelled"];

pub fn is_valid_status(status: &str) -> bool {
    APPOINTMENT_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_are_accepted() {
        for status in APPOINTMENT_STATUSES {
            assert!(is_valid_status(status));
        }
    }

    #[test]
    fn unknown_statuses_are_rejected() {
        assert!(!is_valid_status("done"));
        assert!(!is_valid_status(""));
        assert!(!is_valid_status("Pending"));
    }
}

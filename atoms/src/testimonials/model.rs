use serde::{Deserialize, Serialize};

/// Testimonial domain model - customer review shown on the public site once
/// approved by an admin
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Testimonial {
    pub testimonial_id: String,
    pub author: String,
    pub vehicle: Option<String>,
    pub text: String,
    pub rating: u8, // 1..=5
    pub approved: bool,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTestimonialPayload {
    pub author: String,
    pub vehicle: Option<String>,
    pub text: String,
    pub rating: u8,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTestimonialPayload {
    pub author: Option<String>,
    pub vehicle: Option<String>,
    pub text: Option<String>,
    pub rating: Option<u8>,
    pub approved: Option<bool>,
}

pub fn is_valid_rating(rating: u8) -> bool {
    (1..=5).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(!is_valid_rating(0));
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(6));
    }
}

pub mod http;
pub mod model;
pub mod service;

pub use model::{CreateTestimonialPayload, Testimonial, UpdateTestimonialPayload};
pub use service::*;
pub use http::*;

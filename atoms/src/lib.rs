pub mod appointments;
pub mod gallery;
pub mod i18n;
pub mod testimonials;

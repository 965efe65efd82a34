//! Page Components

mod brainstorm;
mod get_started;
mod home;
mod not_found;
mod pricing;

pub use brainstorm::BrainstormPage;
pub use get_started::GetStartedPage;
pub use home::{FeaturesPage, HomePage, HowItWorksPage, TestimonialsPage};
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;

//! Page modules

pub mod demo;
pub mod landing;

pub use demo::DemoPage;
pub use landing::LandingPage;

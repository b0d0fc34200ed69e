//! Configuration module

mod site;

pub use site::ListingsConfig;
pub use site::SiteConfig;

pub mod ports;
pub mod schema;
pub mod services;
pub mod site_content;
pub mod views;

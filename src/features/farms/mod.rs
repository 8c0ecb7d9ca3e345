pub mod dtos;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::FarmError;
pub use services::FarmService;

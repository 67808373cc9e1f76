mod atm_service;

pub use atm_service::AtmService;

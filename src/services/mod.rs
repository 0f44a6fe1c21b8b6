pub mod diagnostic_logger;
pub mod kick_service;
pub mod lookup_service;
pub mod settings_service;

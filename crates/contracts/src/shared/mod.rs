pub mod envelope;
pub mod remote_config;
pub mod requests;

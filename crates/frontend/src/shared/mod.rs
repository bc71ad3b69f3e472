pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod notifications;
pub mod remote_state;
pub mod session;
pub mod stock_summary;
pub mod text_diff;

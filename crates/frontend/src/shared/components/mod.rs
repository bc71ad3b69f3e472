pub mod bound;
pub mod confirm_prompt;
pub mod json_drawer;
pub mod kv_badge;
pub mod pagination_controls;

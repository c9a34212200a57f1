//! Tauri command handlers.

pub mod registration;

pub use registration::{
    close_registration, get_registration_state, open_registration, submit_registration,
    update_registration_field,
};

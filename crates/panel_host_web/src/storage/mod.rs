//! Browser storage adapters.

pub mod local_panel_state;

pub mod admin;
pub mod aids_modal;
pub mod challenge_modal;
pub mod resources_panel;

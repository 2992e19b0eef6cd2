pub mod admin_panel;
pub mod submit_form;

pub mod confirm;
pub mod edit_dialog;

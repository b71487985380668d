mod app;
pub mod dialogs;
pub mod views;

pub use app::CountdownApp;

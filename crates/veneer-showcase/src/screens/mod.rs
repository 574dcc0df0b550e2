#![forbid(unsafe_code)]

//! One module per catalog screen.

pub mod alerts;
pub mod badges;
pub mod buttons;
pub mod combobox_lab;
pub mod toasts;

pub use alerts::AlertsScreen;
pub use badges::BadgesScreen;
pub use buttons::ButtonsScreen;
pub use combobox_lab::ComboboxScreen;
pub use toasts::ToastsScreen;

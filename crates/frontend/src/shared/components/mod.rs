pub mod error_popup;
pub mod modal;

pub use error_popup::ErrorPopup;
pub use modal::{NotificationModal, WaterAlertModal};

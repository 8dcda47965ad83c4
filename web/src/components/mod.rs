pub mod auth_guard;
pub mod loading;
pub mod navbar;
pub mod notice;
pub mod status_badge;
pub mod time_slot_picker;

// Re-export commonly used types
pub use auth_guard::{RequireAdmin, RequireUser};
pub use loading::LoadingView;
pub use navbar::Navbar;
pub use notice::{ErrorNotice, SuccessNotice};
pub use status_badge::StatusBadge;
pub use time_slot_picker::TimeSlotPicker;

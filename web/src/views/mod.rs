pub mod admin_panel;
pub mod auth;
pub mod book_appointment;
pub mod home;
pub mod my_appointments;
pub mod not_found;

// Re-export the routed pages
pub use admin_panel::AdminPanelPage;
pub use auth::{LoginPage, SignupPage};
pub use book_appointment::BookAppointmentPage;
pub use home::HomePage;
pub use my_appointments::MyAppointmentsPage;
pub use not_found::NotFoundPage;

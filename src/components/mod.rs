//! UI Components
//!
//! One module per page plus the shared widgets.

mod appointments;
mod billing;
mod confirm_dialog;
mod faq;
mod home;
mod login;
mod manage_pets;
mod medical_records;
mod medications;
mod nav_bar;
mod notification;
mod profile;
mod register;
mod vets;

pub use appointments::AppointmentsPage;
pub use billing::BillingPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use manage_pets::ManagePetsPage;
pub use medical_records::MedicalRecordsPage;
pub use medications::MedicationsPage;
pub use nav_bar::NavBar;
pub use notification::NotificationToast;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use vets::VetsPage;

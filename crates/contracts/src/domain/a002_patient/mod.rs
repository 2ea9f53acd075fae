pub mod aggregate;

pub use aggregate::{Patient, PatientId, PatientRow, PatientStatus};

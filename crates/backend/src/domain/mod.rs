pub mod a001_ward;
pub mod a002_patient;
pub mod a003_staff;

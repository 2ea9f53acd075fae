pub mod aggregate;

pub use aggregate::{Ward, WardId, WardStatusView};

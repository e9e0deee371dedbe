pub mod logic;

pub use logic::{CleaningSummary, Cleaner};

pub mod errors;
pub mod ids;
pub mod platform;
pub mod report;

pub use errors::*;
pub use ids::*;
pub use platform::*;

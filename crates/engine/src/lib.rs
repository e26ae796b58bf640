pub mod commission;
pub mod params;
pub mod schedule;
pub mod search;

pub use params::Params;
pub use schedule::{Schedule, ScheduleDay};
pub use search::{search, Accepted, Exhausted};

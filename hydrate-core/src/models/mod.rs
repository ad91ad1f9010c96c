mod activity_level;
mod gender;
mod profile;

pub use activity_level::ActivityLevel;
pub use gender::Gender;
pub use profile::{calculate_daily_goal, Profile};

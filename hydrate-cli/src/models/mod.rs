mod profile_form;
mod volume_unit;

pub use profile_form::{ProfileForm, ProfileFormError};
pub use volume_unit::VolumeUnit;

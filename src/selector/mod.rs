pub mod kneeness;
pub mod preference;

pub use kneeness::KneenessSelector;
pub use preference::PreferenceSelector;

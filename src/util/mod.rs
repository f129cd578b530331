pub mod bitcube;
pub mod kneeness;
pub mod normalizer;
pub mod ordered_map;

pub use bitcube::BitCube;
pub use normalizer::Normalizer;
pub use ordered_map::OrderedMap;

pub mod clock;
pub mod hoppers;
pub mod jam;
pub mod water;

pub mod clock;
pub mod repository;
pub mod seed;

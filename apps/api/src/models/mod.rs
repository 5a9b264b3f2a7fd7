pub mod analysis;
pub mod career;
pub mod profile;

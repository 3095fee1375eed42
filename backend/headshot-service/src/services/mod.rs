//! Service layer: roster collaborator and photo pipeline

pub mod photos;
pub mod roster;

pub use photos::HeadshotPipeline;
pub use roster::RosterClient;

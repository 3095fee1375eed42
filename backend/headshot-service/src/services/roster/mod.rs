//! Roster collaborator: static team table and upstream roster/search client

pub mod client;
pub mod teams;

pub use client::{RosterClient, TeamRoster};
pub use teams::Team;

pub mod config;
pub mod decide;
pub mod gamify;
pub mod schedule;
pub mod session;
pub mod sites;
pub mod stats;

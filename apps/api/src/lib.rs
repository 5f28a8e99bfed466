pub mod config;
pub mod errors;
pub mod extraction;
pub mod resume;
pub mod routes;
pub mod skills;
pub mod state;

// Work Order Board Library
// Timeline layout and conflict detection for a work-center scheduling board

pub mod models;
pub mod services;
pub mod utils;

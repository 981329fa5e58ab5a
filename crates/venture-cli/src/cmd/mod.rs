pub mod config;
pub mod engagement;
pub mod feedback;
pub mod guide;
pub mod journal;
pub mod recommend;
pub mod resources;
pub mod steps;

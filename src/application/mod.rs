/// Library configuration loaded from the environment
pub mod config;

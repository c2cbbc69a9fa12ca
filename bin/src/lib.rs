pub mod cli;
pub mod commands;
pub mod device;
pub mod render;

pub mod app;
pub mod card;
pub mod cli;
pub mod config;
pub mod glyphs;
pub mod input;
pub mod paths;
pub mod render;
pub mod resolve;
pub mod share;
pub mod subject;

pub mod configs;
pub mod item;
pub mod provider;
pub mod query;
pub mod render;
pub mod shell;

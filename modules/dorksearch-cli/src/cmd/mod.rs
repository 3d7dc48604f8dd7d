pub mod build;
pub mod catalog;
pub mod chat;
pub mod generate;
pub mod tips;

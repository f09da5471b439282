pub mod config;
pub mod dictionary;
pub mod encoding;
pub mod translator;

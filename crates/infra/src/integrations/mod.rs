//! External service integrations

pub mod igdb;

//! Core types used throughout the Thinkwire library

pub mod message;
pub mod options;
pub mod response;

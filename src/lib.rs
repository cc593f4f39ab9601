pub mod config;
pub mod error;
pub mod humanize;
pub mod intake;
pub mod metadata;
pub mod model;
pub mod pipeline;
pub mod pixel;
pub mod scoring;

pub mod config;
pub mod error;
pub mod github;
pub mod navigation;
pub mod page;
pub mod provenance;
pub mod spec;
pub mod widget;

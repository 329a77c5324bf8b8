// Skill catalog, matching strategies and similarity scoring. All pure, no I/O
// beyond loading the catalog once at startup.

pub mod catalog;
pub mod matcher;
pub mod scoring;

pub mod build;
pub mod format;
pub mod skill;

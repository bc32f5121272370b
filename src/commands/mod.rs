//! CLI commands for hackgrade

pub mod baseline;
pub mod dispatch;
pub mod grade;
pub mod inspect;

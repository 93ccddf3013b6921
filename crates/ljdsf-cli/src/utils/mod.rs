pub mod particles;
pub mod report;

pub mod course;
pub mod course_delivery;
pub mod intake;
pub mod pagination;
pub mod professor;
pub mod program;

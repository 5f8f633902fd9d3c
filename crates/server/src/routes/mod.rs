pub mod auth;
pub mod course;
pub mod course_delivery;
pub mod current_intakes;
pub mod delivery_overview;
pub mod health;
pub mod intake;
pub mod professor;
pub mod program;
pub mod program_delivery;
pub mod root;

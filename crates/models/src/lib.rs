pub mod campus;
pub mod course_type;
pub mod degree_type;
pub mod professor_type;
pub mod school;
pub mod semester;
pub mod time_slot;

pub use campus::Campus;
pub use course_type::CourseType;
pub use degree_type::DegreeType;
pub use professor_type::ProfessorType;
pub use school::{ProgramType, School};
pub use semester::Semester;
pub use time_slot::TimeSlot;

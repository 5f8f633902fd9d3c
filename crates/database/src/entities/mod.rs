pub mod area;
pub mod course;
pub mod course_delivery;
pub mod course_delivery_section;
pub mod course_program;
pub mod degree;
pub mod intake;
pub mod joined_academic_year;
pub mod professor;
pub mod professor_course_possibility;
pub mod professor_degree;
pub mod program;
pub mod section;
pub mod university;

pub mod courses;

pub mod students;

pub use courses::configure_courses_routes;
pub use students::configure_students_routes;

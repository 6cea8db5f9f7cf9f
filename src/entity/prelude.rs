//! 预导入模块，方便使用

pub use super::course_students::{
    ActiveModel as CourseStudentActiveModel, Entity as CourseStudents,
    Model as CourseStudentModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};

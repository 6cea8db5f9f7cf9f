pub mod common;
pub mod courses;
pub mod students;

pub use common::ApiResponse;

// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    // 通用错误
    BadRequest = 1000,
    InternalServerError = 1001,

    // 课程相关
    CourseNotFound = 2000,
    CourseNameInvalid = 2001,
    CourseStudentsInvalid = 2002,
    CourseStudentsLimitExceeded = 2003,
    CourseCreationFailed = 2004,
    CourseUpdateFailed = 2005,
    CourseDeleteFailed = 2006,

    // 学生相关
    StudentNotFound = 3000,
    StudentNameInvalid = 3001,
    StudentCreationFailed = 3002,
    StudentUpdateFailed = 3003,
    StudentDeleteFailed = 3004,
}

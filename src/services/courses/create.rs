use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use super::checks::{handle_course_write_error, validate_course_students};
use crate::models::{ApiResponse, ErrorCode, courses::requests::CreateCourseRequest};
use crate::utils::validate::validate_course_name;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    mut course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    // 验证课程名称
    course_data.name = match validate_course_name(&course_data.name) {
        Ok(name) => name,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::CourseNameInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);
    let course_config = service.get_course_config(request);

    // 验证选课学生
    course_data.students = match validate_course_students(
        &storage,
        course_data.students,
        course_config.max_students_per_course,
    )
    .await
    {
        Ok(students) => students,
        Err(resp) => return Ok(resp),
    };

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!(
                "Course {} created with {} student(s)",
                course.id,
                course.students.len()
            );
            Ok(HttpResponse::Created().json(course))
        }
        Err(e) => Ok(handle_course_write_error(&e, ErrorCode::CourseCreationFailed)),
    }
}

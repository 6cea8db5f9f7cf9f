use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use super::checks::{handle_course_write_error, validate_course_students};
use crate::models::{ApiResponse, ErrorCode, courses::requests::UpdateCourseRequest};
use crate::utils::validate::validate_course_name;

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    mut update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 查询课程信息
    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course information: {e}"),
                )),
            );
        }
    }

    if let Some(name) = update_data.name.take() {
        let name = match validate_course_name(&name) {
            Ok(name) => name,
            Err(msg) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::CourseNameInvalid, msg)));
            }
        };
        update_data.name = Some(name);
    }

    if let Some(students) = update_data.students.take() {
        let course_config = service.get_course_config(request);
        match validate_course_students(&storage, students, course_config.max_students_per_course)
            .await
        {
            Ok(students) => update_data.students = Some(students),
            Err(resp) => return Ok(resp),
        }
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!("Course {} updated", course.id);
            Ok(HttpResponse::Ok().json(course))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(handle_course_write_error(&e, ErrorCode::CourseUpdateFailed)),
    }
}

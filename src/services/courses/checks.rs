//! 课程写操作共用的校验

use std::sync::Arc;

use actix_web::HttpResponse;
use sea_orm::SqlErr;
use tracing::error;

use crate::errors::CatalogError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::{normalize_student_ids, validate_students_limit};

/// 校验并规范化选课学生列表
pub(crate) async fn validate_course_students(
    storage: &Arc<dyn Storage>,
    student_ids: Vec<i64>,
    max_students: usize,
) -> Result<Vec<i64>, HttpResponse> {
    let student_ids = normalize_student_ids(student_ids);

    if let Err(msg) = validate_students_limit(student_ids.len(), max_students) {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CourseStudentsLimitExceeded,
            msg,
        )));
    }

    match storage.find_missing_student_ids(&student_ids).await {
        Ok(missing) if missing.is_empty() => Ok(student_ids),
        Ok(missing) => Err(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::CourseStudentsInvalid,
            missing,
            "Some students do not exist",
        ))),
        Err(e) => {
            error!("Failed to look up students: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check students: {e}"),
                )),
            )
        }
    }
}

/// 写操作失败时的响应：外键冲突视为学生不存在，其余为服务器错误
pub(crate) fn handle_course_write_error(e: &CatalogError, fallback: ErrorCode) -> HttpResponse {
    error!("Course write failed: {}", e);
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::CourseStudentsInvalid,
                "Some students do not exist",
            ))
        }
        _ => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            fallback,
            format!("Course write failed: {e}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use sea_orm::DbErr;

    #[test]
    fn test_non_constraint_failure_maps_to_server_error() {
        let err = CatalogError::query("写入选课关系失败", DbErr::Custom("disk I/O error".into()));
        let resp = handle_course_write_error(&err, ErrorCode::CourseUpdateFailed);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_connection_failure_maps_to_server_error() {
        let err = CatalogError::database_connection("connection refused");
        let resp = handle_course_write_error(&err, ErrorCode::CourseCreationFailed);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

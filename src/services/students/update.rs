use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::UpdateStudentRequest};
use crate::utils::validate::validate_student_name;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update_data.name.take() {
        match validate_student_name(&name) {
            Ok(name) => update_data.name = Some(name),
            Err(msg) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::StudentNameInvalid, msg)));
            }
        }
    }

    let storage = service.get_storage(request);

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(student)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            let msg = format!("Student update failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::StudentUpdateFailed, msg)))
        }
    }
}

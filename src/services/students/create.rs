use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::utils::validate::validate_student_name;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    mut student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    // 验证学生姓名
    student_data.name = match validate_student_name(&student_data.name) {
        Ok(name) => name,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::StudentNameInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} created", student.id);
            Ok(HttpResponse::Created().json(student))
        }
        Err(e) => {
            let msg = format!("Student creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::StudentCreationFailed, msg)))
        }
    }
}

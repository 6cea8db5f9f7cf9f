use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::CourseListQuery};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    query: Vec<(String, String)>,
) -> ActixResult<HttpResponse> {
    let list_query = match CourseListQuery::from_query_pairs(&query) {
        Ok(list_query) => list_query,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    };

    let storage = service.get_storage(request);

    match storage.list_courses(list_query).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(courses)),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve course list: {e}"),
            )),
        ),
    }
}

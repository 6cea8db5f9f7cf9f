//! 路径参数提取器
//!
//! 非整数的资源 ID 不可能对应任何资源，直接返回 404。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal, $code:expr, $message:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok());

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(InternalError::from_response(
                        concat!("invalid path parameter: ", $param),
                        HttpResponse::NotFound().json(ApiResponse::error_empty($code, $message)),
                    )
                    .into()),
                })
            }
        }
    };
}

define_safe_id_extractor!(
    SafeCourseIdI64,
    "course_id",
    ErrorCode::CourseNotFound,
    "Course not found"
);

define_safe_id_extractor!(
    SafeStudentIdI64,
    "student_id",
    ErrorCode::StudentNotFound,
    "Student not found"
);

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test::TestRequest};

    #[actix_web::test]
    async fn test_numeric_course_id() {
        let (req, mut payload) = TestRequest::default()
            .param("course_id", "42")
            .to_http_parts();
        let id = SafeCourseIdI64::from_request(&req, &mut payload)
            .await
            .unwrap();
        assert_eq!(id, SafeCourseIdI64(42));
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_not_found() {
        let (req, mut payload) = TestRequest::default()
            .param("student_id", "abc")
            .to_http_parts();
        let err = SafeStudentIdI64::from_request(&req, &mut payload)
            .await
            .unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::NOT_FOUND);
    }
}

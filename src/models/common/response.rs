use serde::{Deserialize, Serialize};

use crate::models::ErrorCode;

// 错误响应结构，资源本身以裸 JSON 返回
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T> {
    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_empty_omits_data() {
        let body = serde_json::to_value(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))
        .unwrap();

        assert_eq!(body["code"], 2000);
        assert_eq!(body["message"], "Course not found");
        assert!(body.get("data").is_none());
        assert!(body.get("timestamp").is_some());
    }

    #[test]
    fn test_error_with_data() {
        let body = serde_json::to_value(ApiResponse::error(
            ErrorCode::CourseStudentsInvalid,
            vec![7_i64, 9],
            "Unknown students",
        ))
        .unwrap();

        assert_eq!(body["code"], 2002);
        assert_eq!(body["data"], serde_json::json!([7, 9]));
    }
}

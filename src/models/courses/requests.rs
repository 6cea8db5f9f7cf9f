use serde::Deserialize;

// 创建课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    #[serde(default)]
    pub students: Vec<i64>,
}

// 整体替换课程请求（PUT）
//
// students 缺省时保留原有选课关系
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceCourseRequest {
    pub name: String,
    pub students: Option<Vec<i64>>,
}

// 更新课程请求（PATCH，同时也是存储层的更新参数）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub students: Option<Vec<i64>>,
}

impl From<ReplaceCourseRequest> for UpdateCourseRequest {
    fn from(req: ReplaceCourseRequest) -> Self {
        Self {
            name: Some(req.name),
            students: req.students,
        }
    }
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseListQuery {
    pub ids: Vec<i64>,
    pub name: Option<String>,
}

impl CourseListQuery {
    /// 从原始查询参数构建
    ///
    /// `id` 可重复出现，任一匹配即可；空值忽略；未知参数忽略。
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Result<Self, String> {
        let mut query = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "id" => {
                    let value = value.trim();
                    if value.is_empty() {
                        continue;
                    }
                    let id = value
                        .parse::<i64>()
                        .map_err(|_| format!("Invalid course id filter: '{value}'"))?;
                    if !query.ids.contains(&id) {
                        query.ids.push(id);
                    }
                }
                "name" => {
                    if !value.is_empty() {
                        query.name = Some(value.clone());
                    }
                }
                _ => {}
            }
        }

        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_query() {
        let query = CourseListQuery::from_query_pairs(&[]).unwrap();
        assert_eq!(query, CourseListQuery::default());
    }

    #[test]
    fn test_repeated_ids_collapse() {
        let query =
            CourseListQuery::from_query_pairs(&pairs(&[("id", "3"), ("id", "1"), ("id", "3")]))
                .unwrap();
        assert_eq!(query.ids, vec![3, 1]);
        assert_eq!(query.name, None);
    }

    #[test]
    fn test_name_and_unknown_params() {
        let query = CourseListQuery::from_query_pairs(&pairs(&[
            ("name", "Rust 101"),
            ("ordering", "-id"),
            ("id", ""),
        ]))
        .unwrap();
        assert!(query.ids.is_empty());
        assert_eq!(query.name.as_deref(), Some("Rust 101"));
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        let err = CourseListQuery::from_query_pairs(&pairs(&[("id", "abc")])).unwrap_err();
        assert!(err.contains("abc"));
    }

    #[test]
    fn test_replace_request_into_update() {
        let update: UpdateCourseRequest = ReplaceCourseRequest {
            name: "Databases".to_string(),
            students: None,
        }
        .into();
        assert_eq!(update.name.as_deref(), Some("Databases"));
        assert!(update.students.is_none());
    }
}

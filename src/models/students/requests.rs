use chrono::NaiveDate;
use serde::Deserialize;

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentQueryParams {
    pub name: Option<String>,
}

// 创建学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

// 整体替换学生请求（PUT）
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceStudentRequest {
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

// 更新学生请求（PATCH，同时也是存储层的更新参数）
//
// birth_date: 缺省 = 不修改，null = 清空
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub birth_date: Option<Option<NaiveDate>>,
}

impl From<ReplaceStudentRequest> for UpdateStudentRequest {
    fn from(req: ReplaceStudentRequest) -> Self {
        Self {
            name: Some(req.name),
            birth_date: Some(req.birth_date),
        }
    }
}

// 区分字段缺省与显式 null
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub name: Option<String>,
}

impl From<StudentQueryParams> for StudentListQuery {
    fn from(params: StudentQueryParams) -> Self {
        Self {
            name: params.name.filter(|name| !name.is_empty()),
        }
    }
}

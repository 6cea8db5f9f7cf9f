use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程名称
    pub name: String,
    // 已选课学生ID，按ID升序
    pub students: Vec<i64>,
}

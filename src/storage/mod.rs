use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程管理方法
    // 创建课程并写入选课关系
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出课程（按ID升序）
    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>>;
    // 更新课程，students 存在时整体替换选课关系
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程及其选课关系
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    // 列出学生（按ID升序）
    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生，同时移出所有课程
    async fn delete_student(&self, student_id: i64) -> Result<bool>;
    // 返回给定ID中不存在的学生ID（保持输入顺序）
    async fn find_missing_student_ids(&self, student_ids: &[i64]) -> Result<Vec<i64>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

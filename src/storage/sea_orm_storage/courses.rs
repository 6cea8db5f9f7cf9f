//! 课程存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::course_students::Column as LinkColumn;
use crate::entity::courses::{ActiveModel, Column};
use crate::entity::prelude::{CourseStudentActiveModel, CourseStudents, Courses};
use crate::errors::{CatalogError, Result};
use crate::models::courses::{
    entities::Course,
    requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 批量加载课程的学生ID，按学生ID升序
    async fn load_enrollments<C: ConnectionTrait>(
        conn: &C,
        course_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<i64>>> {
        let mut enrollments: HashMap<i64, Vec<i64>> = HashMap::new();
        if course_ids.is_empty() {
            return Ok(enrollments);
        }

        let links = CourseStudents::find()
            .filter(LinkColumn::CourseId.is_in(course_ids.iter().copied()))
            .order_by_asc(LinkColumn::StudentId)
            .all(conn)
            .await
            .map_err(|e| CatalogError::query("查询选课关系失败", e))?;

        for link in links {
            enrollments
                .entry(link.course_id)
                .or_default()
                .push(link.student_id);
        }

        Ok(enrollments)
    }

    /// 用给定学生集合替换课程的选课关系
    async fn replace_enrollments<C: ConnectionTrait>(
        conn: &C,
        course_id: i64,
        student_ids: &[i64],
    ) -> Result<()> {
        CourseStudents::delete_many()
            .filter(LinkColumn::CourseId.eq(course_id))
            .exec(conn)
            .await
            .map_err(|e| CatalogError::query("清除选课关系失败", e))?;

        for &student_id in student_ids {
            CourseStudentActiveModel {
                course_id: Set(course_id),
                student_id: Set(student_id),
                ..Default::default()
            }
            .insert(conn)
            .await
            .map_err(|e| CatalogError::query("写入选课关系失败", e))?;
        }

        Ok(())
    }

    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CatalogError::query("开启事务失败", e))?;

        let model = ActiveModel {
            name: Set(req.name),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| CatalogError::query("创建课程失败", e))?;

        let mut students = req.students;
        students.sort_unstable();
        students.dedup();
        Self::replace_enrollments(&txn, model.id, &students).await?;

        txn.commit()
            .await
            .map_err(|e| CatalogError::query("提交事务失败", e))?;

        Ok(model.into_course(students))
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| CatalogError::query("查询课程失败", e))?;

        match result {
            Some(model) => {
                let mut enrollments = Self::load_enrollments(&self.db, &[model.id]).await?;
                let students = enrollments.remove(&model.id).unwrap_or_default();
                Ok(Some(model.into_course(students)))
            }
            None => Ok(None),
        }
    }

    /// 列出课程
    pub async fn list_courses_impl(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        let mut select = Courses::find();

        // ID 筛选（任一匹配）
        if !query.ids.is_empty() {
            select = select.filter(Column::Id.is_in(query.ids));
        }

        // 名称精确匹配
        if let Some(name) = query.name {
            select = select.filter(Column::Name.eq(name));
        }

        let courses = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CatalogError::query("查询课程列表失败", e))?;

        let course_ids: Vec<i64> = courses.iter().map(|m| m.id).collect();
        let mut enrollments = Self::load_enrollments(&self.db, &course_ids).await?;

        Ok(courses
            .into_iter()
            .map(|m| {
                let students = enrollments.remove(&m.id).unwrap_or_default();
                m.into_course(students)
            })
            .collect())
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CatalogError::query("开启事务失败", e))?;

        // 先检查课程是否存在
        let existing = Courses::find_by_id(course_id)
            .one(&txn)
            .await
            .map_err(|e| CatalogError::query("查询课程失败", e))?;
        if existing.is_none() {
            return Ok(None);
        }

        if let Some(name) = update.name {
            ActiveModel {
                id: Set(course_id),
                name: Set(name),
                ..Default::default()
            }
            .update(&txn)
            .await
            .map_err(|e| CatalogError::query("更新课程失败", e))?;
        }

        if let Some(mut students) = update.students {
            students.sort_unstable();
            students.dedup();
            Self::replace_enrollments(&txn, course_id, &students).await?;
        }

        txn.commit()
            .await
            .map_err(|e| CatalogError::query("提交事务失败", e))?;

        self.get_course_by_id_impl(course_id).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CatalogError::query("开启事务失败", e))?;

        Self::replace_enrollments(&txn, course_id, &[]).await?;

        let result = Courses::delete_by_id(course_id)
            .exec(&txn)
            .await
            .map_err(|e| CatalogError::query("删除课程失败", e))?;

        txn.commit()
            .await
            .map_err(|e| CatalogError::query("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}

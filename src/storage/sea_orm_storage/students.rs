//! 学生存储操作

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::course_students::Column as LinkColumn;
use crate::entity::prelude::{CourseStudents, Students};
use crate::entity::students::{ActiveModel, Column};
use crate::errors::{CatalogError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            name: Set(req.name),
            birth_date: Set(req.birth_date),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CatalogError::query("创建学生失败", e))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| CatalogError::query("查询学生失败", e))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出学生
    pub async fn list_students_impl(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        let mut select = Students::find();

        if let Some(name) = query.name {
            select = select.filter(Column::Name.eq(name));
        }

        let students = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CatalogError::query("查询学生列表失败", e))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(student_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(student_id),
            ..Default::default()
        };
        let mut changed = false;

        if let Some(name) = update.name {
            model.name = Set(name);
            changed = true;
        }

        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(birth_date);
            changed = true;
        }

        if changed {
            model
                .update(&self.db)
                .await
                .map_err(|e| CatalogError::query("更新学生失败", e))?;
        }

        self.get_student_by_id_impl(student_id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CatalogError::query("开启事务失败", e))?;

        // 先将学生移出所有课程
        CourseStudents::delete_many()
            .filter(LinkColumn::StudentId.eq(student_id))
            .exec(&txn)
            .await
            .map_err(|e| CatalogError::query("清除选课关系失败", e))?;

        let result = Students::delete_by_id(student_id)
            .exec(&txn)
            .await
            .map_err(|e| CatalogError::query("删除学生失败", e))?;

        txn.commit()
            .await
            .map_err(|e| CatalogError::query("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 查找不存在的学生ID
    pub async fn find_missing_student_ids_impl(&self, student_ids: &[i64]) -> Result<Vec<i64>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashSet<i64> = Students::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::Id.is_in(student_ids.iter().copied()))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| CatalogError::query("查询学生失败", e))?
            .into_iter()
            .collect();

        Ok(student_ids
            .iter()
            .copied()
            .filter(|id| !found.contains(id))
            .collect())
    }
}

pub mod checks;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::config::CourseConfig;
use crate::models::courses::requests::{
    CreateCourseRequest, ReplaceCourseRequest, UpdateCourseRequest,
};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 课程业务规则，未注册时使用默认值
    pub(crate) fn get_course_config(&self, request: &HttpRequest) -> CourseConfig {
        request
            .app_data::<web::Data<CourseConfig>>()
            .map(|config| config.get_ref().clone())
            .unwrap_or_default()
    }

    // 获取课程列表
    pub async fn list_courses(
        &self,
        request: &HttpRequest,
        query: Vec<(String, String)>,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, request, query).await
    }

    // 根据课程 ID 获取课程
    pub async fn get_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, request, course_id).await
    }

    pub async fn create_course(
        &self,
        request: &HttpRequest,
        course_data: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, request, course_data).await
    }

    // 整体替换课程信息
    pub async fn replace_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
        course_data: ReplaceCourseRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, request, course_id, course_data.into()).await
    }

    // 部分更新课程信息
    pub async fn patch_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, request, course_id, update_data).await
    }

    // 根据课程 ID 删除课程
    pub async fn delete_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, request, course_id).await
    }
}

//! Test context - in-memory database plus app construction

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_http::Request;
use actix_web::{
    App,
    dev::{Service, ServiceResponse},
    test::{self, TestRequest},
    web,
};
use course_catalog::{
    config::{CourseConfig, DatabaseConfig},
    middlewares::RequestTrace,
    models::{
        courses::{
            entities::Course,
            requests::{CourseListQuery, CreateCourseRequest},
        },
        students::{entities::Student, requests::CreateStudentRequest},
    },
    routes,
    storage::{Storage, sea_orm_storage::SeaOrmStorage},
    utils::{json_error_handler, query_error_handler},
};

use super::TestResponse;

pub struct TestCtx {
    pub storage: Arc<dyn Storage>,
    pub course_config: CourseConfig,
    sequence: AtomicUsize,
}

impl TestCtx {
    /// Create a context with default course rules
    pub async fn new() -> Self {
        Self::with_course_config(CourseConfig::default()).await
    }

    /// Create a context with custom course rules
    pub async fn with_course_config(course_config: CourseConfig) -> Self {
        let database = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        let storage = SeaOrmStorage::connect(&database)
            .await
            .expect("in-memory database should migrate");

        Self {
            storage: Arc::new(storage),
            course_config,
            sequence: AtomicUsize::new(1),
        }
    }

    /// Build the actix-web test app with all routes configured
    pub async fn app(
        &self,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .wrap(RequestTrace)
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new(self.storage.clone()))
                .app_data(web::Data::new(self.course_config.clone()))
                .configure(routes::configure_courses_routes)
                .configure(routes::configure_students_routes),
        )
        .await
    }

    fn next_sequence(&self) -> usize {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Create `quantity` courses with unique names and no students
    pub async fn course_factory(&self, quantity: usize) -> Vec<Course> {
        let mut courses = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            let name = format!("course-{}", self.next_sequence());
            let course = self
                .storage
                .create_course(CreateCourseRequest {
                    name,
                    students: vec![],
                })
                .await
                .unwrap();
            courses.push(course);
        }
        courses
    }

    /// Create a single course with the given students
    pub async fn make_course(&self, name: &str, students: Vec<i64>) -> Course {
        self.storage
            .create_course(CreateCourseRequest {
                name: name.to_string(),
                students,
            })
            .await
            .unwrap()
    }

    /// Stored courses whose name matches exactly
    pub async fn courses_named(&self, name: &str) -> Vec<Course> {
        self.storage
            .list_courses(CourseListQuery {
                ids: vec![],
                name: Some(name.to_string()),
            })
            .await
            .unwrap()
    }

    /// Create a student with the given name
    pub async fn make_student(&self, name: &str) -> Student {
        self.storage
            .create_student(CreateStudentRequest {
                name: name.to_string(),
                birth_date: None,
            })
            .await
            .unwrap()
    }

    /// Create `quantity` students with unique names
    pub async fn student_factory(&self, quantity: usize) -> Vec<Student> {
        let mut students = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            let name = format!("student-{}", self.next_sequence());
            students.push(self.make_student(&name).await);
        }
        students
    }
}

/// Send a request through the app and collect the response
pub async fn send<S>(app: &S, req: TestRequest) -> TestResponse
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = test::call_service(app, req.to_request()).await;
    TestResponse::new(resp).await
}

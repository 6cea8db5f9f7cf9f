//! Student API Tests
//!
//! CRUD behavior of the `/students/` resource and how student changes
//! show up in course enrollments.

mod common;

use actix_web::test::TestRequest;
use common::{TestCtx, keys_of, send};
use serde_json::{Value, json};

#[actix_web::test]
async fn create_and_retrieve_student() {
    let ctx = TestCtx::new().await;
    let app = ctx.app().await;

    let created: Value = send(
        &app,
        TestRequest::post()
            .uri("/students/")
            .set_json(json!({"name": " Ada ", "birth_date": "1815-12-10"})),
    )
    .await
    .assert_created()
    .json();

    assert_eq!(created["name"], "Ada");
    assert_eq!(created["birth_date"], "1815-12-10");

    let fetched: Value = send(
        &app,
        TestRequest::get().uri(&format!("/students/{}/", created["id"])),
    )
    .await
    .assert_ok()
    .json();

    assert_eq!(fetched, created);
    let fields: Vec<String> = keys_of(&fetched).into_iter().collect();
    assert_eq!(fields, vec!["birth_date", "id", "name"]);
}

#[actix_web::test]
async fn create_student_requires_name() {
    let ctx = TestCtx::new().await;
    let app = ctx.app().await;

    send(
        &app,
        TestRequest::post()
            .uri("/students/")
            .set_json(json!({"name": ""})),
    )
    .await
    .assert_bad_request()
    .assert_error_code(3001);
}

#[actix_web::test]
async fn create_student_with_malformed_birth_date() {
    let ctx = TestCtx::new().await;
    let app = ctx.app().await;

    send(
        &app,
        TestRequest::post()
            .uri("/students/")
            .set_json(json!({"name": "Eve", "birth_date": "yesterday"})),
    )
    .await
    .assert_bad_request();
}

#[actix_web::test]
async fn list_students_filtered_by_name() {
    let ctx = TestCtx::new().await;
    let app = ctx.app().await;
    ctx.student_factory(4).await;
    let target = ctx.make_student("Grace").await;

    let all: Vec<Value> = send(&app, TestRequest::get().uri("/students/"))
        .await
        .assert_ok()
        .json();
    assert_eq!(all.len(), 5);

    let filtered: Vec<Value> = send(&app, TestRequest::get().uri("/students/?name=Grace"))
        .await
        .assert_ok()
        .json();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["id"], target.id);
}

#[actix_web::test]
async fn replace_student() {
    let ctx = TestCtx::new().await;
    let app = ctx.app().await;
    let student = ctx.make_student("Hal").await;

    let body: Value = send(
        &app,
        TestRequest::put()
            .uri(&format!("/students/{}/", student.id))
            .set_json(json!({"name": "Hal 9000", "birth_date": "1992-01-12"})),
    )
    .await
    .assert_ok()
    .json();

    assert_eq!(body["name"], "Hal 9000");
    assert_eq!(body["birth_date"], "1992-01-12");
}

#[actix_web::test]
async fn patch_student_clears_birth_date() {
    let ctx = TestCtx::new().await;
    let app = ctx.app().await;

    let created: Value = send(
        &app,
        TestRequest::post()
            .uri("/students/")
            .set_json(json!({"name": "Ivy", "birth_date": "2000-05-01"})),
    )
    .await
    .assert_created()
    .json();

    let uri = format!("/students/{}/", created["id"]);

    let renamed: Value = send(
        &app,
        TestRequest::patch()
            .uri(&uri)
            .set_json(json!({"name": "Ivy Lee"})),
    )
    .await
    .assert_ok()
    .json();
    assert_eq!(renamed["birth_date"], "2000-05-01");

    let cleared: Value = send(
        &app,
        TestRequest::patch()
            .uri(&uri)
            .set_json(json!({"birth_date": null})),
    )
    .await
    .assert_ok()
    .json();
    assert_eq!(cleared["name"], "Ivy Lee");
    assert!(cleared["birth_date"].is_null());
}

#[actix_web::test]
async fn update_missing_student() {
    let ctx = TestCtx::new().await;
    let app = ctx.app().await;

    send(
        &app,
        TestRequest::put()
            .uri("/students/31/")
            .set_json(json!({"name": "Nobody"})),
    )
    .await
    .assert_not_found()
    .assert_error_code(3000);
}

#[actix_web::test]
async fn delete_student_leaves_courses() {
    let ctx = TestCtx::new().await;
    let app = ctx.app().await;
    let students = ctx.student_factory(2).await;
    let course = ctx
        .make_course("Astronomy", vec![students[0].id, students[1].id])
        .await;

    send(
        &app,
        TestRequest::delete().uri(&format!("/students/{}/", students[0].id)),
    )
    .await
    .assert_no_content();

    send(
        &app,
        TestRequest::get().uri(&format!("/students/{}/", students[0].id)),
    )
    .await
    .assert_not_found();

    let body: Value = send(
        &app,
        TestRequest::get().uri(&format!("/courses/{}/", course.id)),
    )
    .await
    .assert_ok()
    .json();
    assert_eq!(body["students"], json!([students[1].id]));
}

#[actix_web::test]
async fn delete_missing_student() {
    let ctx = TestCtx::new().await;
    let app = ctx.app().await;

    send(&app, TestRequest::delete().uri("/students/8/"))
        .await
        .assert_not_found();
}

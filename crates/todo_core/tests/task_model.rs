use chrono::NaiveDate;
use std::cmp::Ordering;
use todo_core::{parse_due_date, Task, TaskValidationError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn new_task_starts_pending() {
    let task = Task::new(7, "title", "", None).unwrap();
    assert_eq!(task.id(), 7);
    assert!(!task.is_done());
    assert_eq!(task.description(), "");
    assert_eq!(task.due_date(), None);
}

#[test]
fn new_task_rejects_blank_title() {
    assert_eq!(
        Task::new(1, "", "", None).unwrap_err(),
        TaskValidationError::EmptyTitle
    );
    assert_eq!(
        Task::new(1, " \t", "", None).unwrap_err(),
        TaskValidationError::EmptyTitle
    );
}

#[test]
fn mark_done_returns_new_value_and_keeps_original() {
    let task = Task::new(3, "ship", "v1", Some(date(2024, 6, 1))).unwrap();
    let done = task.mark_done();

    assert!(!task.is_done());
    assert!(done.is_done());
    assert_eq!(done.id(), task.id());
    assert_eq!(done.title(), task.title());
    assert_eq!(done.description(), task.description());
    assert_eq!(done.due_date(), task.due_date());
    assert_ne!(done, task);
    assert_eq!(done.mark_done(), done);
}

#[test]
fn equality_is_structural() {
    let a = Task::new(1, "same", "d", Some(date(2024, 1, 1))).unwrap();
    let b = Task::new(1, "same", "d", Some(date(2024, 1, 1))).unwrap();
    let c = Task::new(1, "same", "other", Some(date(2024, 1, 1))).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn listing_order_puts_pending_first_then_due_date_then_id() {
    let pending_undated = Task::new(1, "a", "", None).unwrap();
    let pending_dated = Task::new(2, "b", "", Some(date(2030, 1, 1))).unwrap();
    let done_dated = Task::new(3, "c", "", Some(date(2000, 1, 1)))
        .unwrap()
        .mark_done();
    let pending_same_date = Task::new(4, "d", "", Some(date(2030, 1, 1))).unwrap();

    assert_eq!(
        pending_dated.listing_order(&pending_undated),
        Ordering::Less
    );
    assert_eq!(
        pending_undated.listing_order(&done_dated),
        Ordering::Less
    );
    assert_eq!(
        pending_dated.listing_order(&pending_same_date),
        Ordering::Less
    );

    let mut tasks = vec![
        done_dated.clone(),
        pending_undated.clone(),
        pending_same_date.clone(),
        pending_dated.clone(),
    ];
    tasks.sort_by(Task::listing_order);
    assert_eq!(
        tasks,
        vec![pending_dated, pending_same_date, pending_undated, done_dated]
    );
}

#[test]
fn parse_due_date_accepts_iso_dates_only() {
    assert_eq!(parse_due_date("2024-12-31").unwrap(), date(2024, 12, 31));
    assert_eq!(parse_due_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));

    for bad in ["2024-13-01", "2023-02-29", "31.12.2024", "2024-1-5", "", "tomorrow"] {
        let err = parse_due_date(bad).unwrap_err();
        assert_eq!(
            err,
            TaskValidationError::InvalidDueDate {
                value: bad.to_string()
            }
        );
    }
}

#[test]
fn task_serializes_with_iso_due_date() {
    let task = Task::new(5, "json", "body", Some(date(2024, 12, 31))).unwrap();
    let value = serde_json::to_value(&task).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "id": 5,
            "title": "json",
            "description": "body",
            "due_date": "2024-12-31",
            "done": false
        })
    );

    let undated = serde_json::to_value(Task::new(6, "x", "", None).unwrap()).unwrap();
    assert!(undated["due_date"].is_null());
}

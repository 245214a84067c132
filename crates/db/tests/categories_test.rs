//! Integration tests for category lifecycle and cascade behavior.

use daytrack_core::ActivityDraft;
use daytrack_db::{Database, DbError};

use queries_shared::{at, db_with_categories, insert, titles};

#[tokio::test]
async fn test_unique_category_is_retrievable() {
    let db = Database::new_in_memory().await.unwrap();
    let created = db.create_category("Reading").await.unwrap();

    let listed = db.list_categories().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(db.get_category(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn test_duplicate_category_fails() {
    let (db, _) = db_with_categories(&["Work"]).await;
    let err = db.create_category("Work").await.unwrap_err();
    assert!(matches!(err, DbError::DuplicateCategory(_)));
}

#[tokio::test]
async fn test_delete_category_cascades_to_activities() {
    let (db, cats) = db_with_categories(&["Work", "Health"]).await;
    let (work, health) = (&cats[0], &cats[1]);

    insert(&db, ActivityDraft::new("Email", work.id), "2024-01-01T08:00:00Z").await;
    insert(&db, ActivityDraft::new("Review", work.id), "2024-01-01T09:00:00Z").await;
    insert(&db, ActivityDraft::new("Run", health.id), "2024-01-01T10:00:00Z").await;

    assert!(db.delete_category(work.id).await.unwrap());

    let remaining = db.list_activities().await.unwrap();
    assert_eq!(titles(&remaining), vec!["Run"]);
    assert_eq!(db.list_categories().await.unwrap(), vec![health.clone()]);
}

#[tokio::test]
async fn test_delete_empty_category_only_removes_row() {
    let (db, cats) = db_with_categories(&["Work", "Study"]).await;
    insert(&db, ActivityDraft::new("Email", cats[0].id), "2024-01-01T08:00:00Z").await;

    assert!(db.delete_category(cats[1].id).await.unwrap());

    assert_eq!(db.list_activities().await.unwrap().len(), 1);
    assert_eq!(db.list_categories().await.unwrap(), vec![cats[0].clone()]);
}

#[tokio::test]
async fn test_activity_moves_between_categories() {
    let (db, cats) = db_with_categories(&["Work", "Personal"]).await;
    let activity = insert(&db, ActivityDraft::new("Call", cats[0].id), "2024-01-01T08:00:00Z").await;

    let mut draft = activity.to_draft();
    draft.category_id = cats[1].id;
    let moved = db
        .update_activity_at(activity.id, &draft, at("2024-01-01T09:00:00Z"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.category_name, "Personal");

    // Deleting the old owner no longer affects it.
    db.delete_category(cats[0].id).await.unwrap();
    assert!(db.get_activity(activity.id).await.unwrap().is_some());
}

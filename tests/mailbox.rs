use mockmail::mailbox::{
    Mailbox, MemoryStorage, Selection,
    scenario::{ImportError, parse_scenario},
    view::{UnreadCounts, ViewFilter, derive_view, timestamp_millis},
};
use mockmail::models::email::folder::Folder;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

const KEY: &str = "finmgt_case_emails_v1";

async fn sample_mailbox() -> (Arc<MemoryStorage>, Mailbox<Arc<MemoryStorage>>) {
    let storage = Arc::new(MemoryStorage::new());
    let mailbox = Mailbox::open(storage.clone(), KEY).await;
    (storage, mailbox)
}

fn scenario() -> String {
    json!([
        {
            "id": "a", "subject": "Budget draft", "from": { "name": "Finance", "email": "fin@ssw.sg" },
            "date": "2024-08-03T10:00:00Z", "folder": "Inbox", "unread": true,
            "tags": ["Budget"], "body": "<p>numbers</p>"
        },
        {
            "id": "b", "subject": "Venue", "from": { "name": "Ops", "email": "ops@ssw.sg" },
            "date": "2024-08-05T10:00:00Z", "folder": "Inbox", "unread": false, "body": "<p>hall</p>"
        },
        {
            "id": "c", "subject": "Undated", "from": { "name": "Ops", "email": "ops@ssw.sg" },
            "date": "sometime", "folder": "Inbox", "unread": true, "body": "budget later"
        },
        {
            "id": "d", "subject": "Junk", "from": { "name": "X", "email": "x@spam.test" },
            "date": "2024-08-04", "folder": "Spam", "unread": true, "body": "win"
        },
        {
            "id": "e", "subject": "Odd", "from": { "name": "Y", "email": "y@example.test" },
            "date": "2024-08-04T08:00:00Z", "folder": "Outbox", "unread": true, "body": "?"
        }
    ])
    .to_string()
}

fn ids(view: &[&mockmail::models::email::message::Message]) -> Vec<String> {
    view.iter().map(|m| m.id.clone()).collect()
}

#[tokio::test]
async fn empty_storage_boots_sample_and_persists_it() {
    let (storage, mailbox) = sample_mailbox().await;
    assert_eq!(mailbox.messages().len(), 5);
    assert_eq!(mailbox.view().len(), 4);
    assert!(storage.get(KEY).is_some());
    assert_eq!(mailbox.selected_id(), Some(mailbox.view()[0].id.as_str()));
}

#[tokio::test]
async fn corrupt_storage_falls_back_to_sample() {
    let storage = MemoryStorage::with_entry(KEY, "{ definitely not json");
    let mailbox = Mailbox::open(storage, KEY).await;
    assert_eq!(mailbox.messages().len(), 5);
}

#[tokio::test]
async fn stored_collection_is_restored() {
    let (storage, mut mailbox) = sample_mailbox().await;
    mailbox.import_scenario(&scenario()).await.unwrap();
    mailbox.toggle_star("b").await;

    let reopened = Mailbox::open(storage.clone(), KEY).await;
    assert_eq!(reopened.messages().len(), 5);
    assert!(reopened.message("b").unwrap().starred);
}

#[tokio::test]
async fn failed_writes_keep_memory_state() {
    let (storage, mut mailbox) = sample_mailbox().await;
    let before = storage.get(KEY).unwrap();
    storage.set_reject_writes(true);

    let id = mailbox.view()[0].id.clone();
    assert!(mailbox.move_to(&id, Folder::Archive).await);
    assert_eq!(mailbox.message(&id).unwrap().folder, Folder::Archive);
    assert_eq!(storage.get(KEY).unwrap(), before);
}

#[tokio::test]
async fn view_sorts_newest_first_with_undated_last() {
    let (_, mut mailbox) = sample_mailbox().await;
    mailbox.import_scenario(&scenario()).await.unwrap();
    assert_eq!(ids(&mailbox.view()), ["b", "a", "c"]);
    assert_eq!(timestamp_millis("sometime"), None);
    assert!(timestamp_millis("2024-08-04").is_some());
}

#[tokio::test]
async fn counts_cover_every_folder_regardless_of_view() {
    let (_, mut mailbox) = sample_mailbox().await;
    mailbox.import_scenario(&scenario()).await.unwrap();
    mailbox.set_query("zzz");
    mailbox.set_unread_only(true);

    let counts = mailbox.unread_counts();
    for folder in Folder::KNOWN {
        let expected = mailbox
            .messages()
            .iter()
            .filter(|m| m.folder == folder && m.unread)
            .count();
        assert_eq!(counts.get(&folder), expected);
    }
    assert_eq!(counts.get(&Folder::Inbox), 2);
    assert_eq!(counts.get(&Folder::Spam), 1);
    assert_eq!(counts.get(&Folder::Archive), 0);
    assert_eq!(counts, UnreadCounts::tally(mailbox.messages()));
}

#[tokio::test]
async fn unknown_folder_is_kept_but_unreachable() {
    let (_, mut mailbox) = sample_mailbox().await;
    mailbox.import_scenario(&scenario()).await.unwrap();
    let odd = mailbox.message("e").unwrap();
    assert_eq!(odd.folder, Folder::Other("Outbox".into()));
    assert!(!odd.folder.is_navigable());
    for folder in Folder::NAVIGABLE {
        mailbox.switch_folder(folder);
        assert!(mailbox.view().iter().all(|m| m.id != "e"));
    }
    let exported = mailbox.export_scenario().unwrap();
    assert!(exported.contains("\"Outbox\""));
}

#[tokio::test]
async fn search_results_are_a_subset() {
    let (_, mut mailbox) = sample_mailbox().await;
    mailbox.import_scenario(&scenario()).await.unwrap();
    let all: HashSet<String> = ids(&mailbox.view()).into_iter().collect();

    for query in ["budget", "BUDGET", "ops@", "hall", "numbers", "nothing-matches"] {
        mailbox.set_query(query);
        let hits = ids(&mailbox.view());
        assert!(hits.iter().all(|id| all.contains(id)), "query {query}");
    }
    mailbox.set_query(" Budget ");
    assert_eq!(ids(&mailbox.view()), ["a", "c"]);
}

#[tokio::test]
async fn unread_only_filter() {
    let (_, mut mailbox) = sample_mailbox().await;
    mailbox.import_scenario(&scenario()).await.unwrap();
    mailbox.set_unread_only(true);
    assert_eq!(ids(&mailbox.view()), ["a", "c"]);
}

#[tokio::test]
async fn move_to_changes_folder_views() {
    let (_, mut mailbox) = sample_mailbox().await;
    let inbox_first = mailbox.view()[0].id.clone();
    let was_unread = mailbox.message(&inbox_first).unwrap().unread;

    assert!(mailbox.move_to(&inbox_first, Folder::Archive).await);
    assert!(mailbox.view().iter().all(|m| m.id != inbox_first));
    assert_eq!(mailbox.view().len(), 3);

    let counts = mailbox.unread_counts();
    assert_eq!(counts.get(&Folder::Archive), usize::from(was_unread));
    assert_eq!(counts.get(&Folder::Inbox), 2 - usize::from(was_unread));

    mailbox.switch_folder(Folder::Archive);
    assert_eq!(ids(&mailbox.view()), [inbox_first.clone()]);
    assert_eq!(mailbox.selected_id(), Some(inbox_first.as_str()));
}

#[tokio::test]
async fn remove_and_restore() {
    let (_, mut mailbox) = sample_mailbox().await;
    let id = mailbox.view()[1].id.clone();
    assert!(mailbox.remove(&id).await);
    assert_eq!(mailbox.message(&id).unwrap().folder, Folder::Trash);
    assert_eq!(mailbox.messages().len(), 5);
    assert!(mailbox.restore(&id).await);
    assert_eq!(mailbox.message(&id).unwrap().folder, Folder::Inbox);
}

#[tokio::test]
async fn mutations_on_unknown_ids_are_noops() {
    let (storage, mut mailbox) = sample_mailbox().await;
    let before = storage.get(KEY).unwrap();
    assert!(!mailbox.toggle_star("missing").await);
    assert!(!mailbox.mark_read("missing", false).await);
    assert!(!mailbox.open_message("missing").await);
    assert_eq!(storage.get(KEY).unwrap(), before);
}

#[tokio::test]
async fn open_message_selects_and_marks_read() {
    let (_, mut mailbox) = sample_mailbox().await;
    let second = mailbox.view()[1].id.clone();
    assert!(mailbox.message(&second).unwrap().unread);

    assert!(mailbox.open_message(&second).await);
    assert_eq!(mailbox.selected_id(), Some(second.as_str()));
    assert!(!mailbox.message(&second).unwrap().unread);
    assert_eq!(mailbox.selected().unwrap().id, second);

    assert!(mailbox.mark_read(&second, true).await);
    assert!(mailbox.message(&second).unwrap().unread);
}

#[tokio::test]
async fn toggle_star_twice_clears_it() {
    let (_, mut mailbox) = sample_mailbox().await;
    let id = mailbox.view()[0].id.clone();
    mailbox.toggle_star(&id).await;
    assert!(mailbox.message(&id).unwrap().starred);
    mailbox.toggle_star(&id).await;
    assert!(!mailbox.message(&id).unwrap().starred);
}

#[tokio::test]
async fn folder_switch_reselects_first() {
    let (_, mut mailbox) = sample_mailbox().await;
    mailbox.switch_folder(Folder::Sent);
    let view = mailbox.view();
    assert_eq!(view.len(), 1);
    assert_eq!(mailbox.selected_id(), Some(view[0].id.as_str()));

    mailbox.switch_folder(Folder::Trash);
    assert!(mailbox.view().is_empty());
    assert_eq!(mailbox.selected_id(), None);
    assert!(mailbox.selected().is_none());
}

#[test]
fn selection_resolves_within_view() {
    let messages = parse_scenario(&scenario()).unwrap();
    let filter = ViewFilter {
        folder: &Folder::Inbox,
        query: "",
        unread_only: false,
    };
    let view = derive_view(&messages, &filter);

    let mut selection = Selection::default();
    selection.reconcile(&view);
    assert_eq!(selection.id(), Some("b"));

    selection.select("d");
    assert_eq!(selection.resolve(&view).unwrap().id, "b");
    selection.select("c");
    assert_eq!(selection.resolve(&view).unwrap().id, "c");
    selection.reconcile(&view);
    assert_eq!(selection.id(), Some("c"));
}

#[tokio::test]
async fn import_rejects_non_array() {
    let (storage, mut mailbox) = sample_mailbox().await;
    let before: Vec<_> = mailbox.messages().to_vec();
    let stored = storage.get(KEY);

    let err = mailbox.import_scenario(r#"{"not":"an array"}"#).await.unwrap_err();
    assert!(matches!(err, ImportError::NotAnArray));
    assert_eq!(mailbox.messages(), before.as_slice());
    assert_eq!(storage.get(KEY), stored);
}

#[tokio::test]
async fn import_rejects_missing_fields() {
    let (_, mut mailbox) = sample_mailbox().await;
    let before: Vec<_> = mailbox.messages().to_vec();

    let err = mailbox.import_scenario(r#"[{"subject":"x"}]"#).await.unwrap_err();
    assert!(matches!(
        err,
        ImportError::MissingField { index: 0, field: "from" }
    ));

    let partial = json!([
        { "subject": "ok", "from": { "name": "A", "email": "a@x" }, "date": "2024-01-01", "folder": "Inbox", "body": "b" },
        { "subject": "bad", "from": { "name": "A", "email": "a@x" }, "date": "2024-01-01", "folder": "Inbox", "body": "" }
    ]);
    let err = mailbox.import_scenario(&partial.to_string()).await.unwrap_err();
    assert!(matches!(
        err,
        ImportError::MissingField { index: 1, field: "body" }
    ));
    assert_eq!(mailbox.messages(), before.as_slice());
}

#[test]
fn import_rejects_bad_shapes() {
    assert!(matches!(parse_scenario("not json"), Err(ImportError::Json(_))));
    assert!(matches!(
        parse_scenario("[1]"),
        Err(ImportError::NotAnObject { index: 0 })
    ));
    let bad_from = json!([{ "subject": "s", "from": "a@x", "date": "d", "folder": "Inbox", "body": "b" }]);
    assert!(matches!(
        parse_scenario(&bad_from.to_string()),
        Err(ImportError::InvalidField { index: 0, .. })
    ));
    let dup = json!([
        { "id": "x", "subject": "s", "from": { "name": "A", "email": "a@x" }, "date": "d", "folder": "Inbox", "body": "b" },
        { "id": "x", "subject": "s", "from": { "name": "A", "email": "a@x" }, "date": "d", "folder": "Inbox", "body": "b" }
    ]);
    assert!(matches!(
        parse_scenario(&dup.to_string()),
        Err(ImportError::DuplicateId { index: 1, .. })
    ));
}

#[test]
fn import_fills_id_and_recipient() {
    let raw = json!([{ "subject": "s", "from": { "name": "A", "email": "a@x" }, "date": "d", "folder": "Inbox", "body": "b" }]);
    let messages = parse_scenario(&raw.to_string()).unwrap();
    assert!(!messages[0].id.is_empty());
    assert_eq!(messages[0].to.len(), 1);
    assert_eq!(messages[0].to[0].name, "Student");
    assert!(!messages[0].unread);
}

#[tokio::test]
async fn import_resets_folder_and_selection() {
    let (_, mut mailbox) = sample_mailbox().await;
    mailbox.switch_folder(Folder::Sent);
    let imported = mailbox.import_scenario(&scenario()).await.unwrap();
    assert_eq!(imported, 5);
    assert_eq!(mailbox.folder(), &Folder::Inbox);
    assert_eq!(mailbox.selected_id(), Some("b"));
}

#[tokio::test]
async fn export_then_import_is_idempotent() {
    let (_, mut mailbox) = sample_mailbox().await;
    let id = mailbox.view()[0].id.clone();
    mailbox.toggle_star(&id).await;
    mailbox.move_to(&id, Folder::Archive).await;

    let before = mailbox.messages().to_vec();
    let exported = mailbox.export_scenario().unwrap();
    mailbox.import_scenario(&exported).await.unwrap();
    assert_eq!(mailbox.messages(), before.as_slice());
    assert_eq!(mailbox.export_scenario().unwrap(), exported);
}

#[tokio::test]
async fn reset_generates_fresh_ids() {
    let (_, mut mailbox) = sample_mailbox().await;
    mailbox.reset_to_sample().await;
    let first: HashSet<String> = mailbox.messages().iter().map(|m| m.id.clone()).collect();
    mailbox.reset_to_sample().await;
    let second: HashSet<String> = mailbox.messages().iter().map(|m| m.id.clone()).collect();

    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 5);
    assert!(first.is_disjoint(&second));
    assert_eq!(mailbox.folder(), &Folder::Inbox);
}

#[tokio::test]
async fn unknown_fields_survive_import_and_export() {
    let (storage, mut mailbox) = sample_mailbox().await;
    let raw = json!([{
        "id": "p1", "subject": "Priority memo", "from": { "name": "A", "email": "a@x" },
        "date": "2024-08-01T09:00:00Z", "folder": "Inbox", "body": "b",
        "priority": "high", "replyTo": { "name": "Desk", "email": "desk@ssw.sg" }
    }]);
    mailbox.import_scenario(&raw.to_string()).await.unwrap();

    let exported: serde_json::Value =
        serde_json::from_str(&mailbox.export_scenario().unwrap()).unwrap();
    assert_eq!(exported[0]["priority"], "high");
    assert_eq!(exported[0]["replyTo"]["email"], "desk@ssw.sg");

    let reopened = Mailbox::open(storage.clone(), KEY).await;
    assert_eq!(reopened.message("p1").unwrap().extra["priority"], "high");
}

#[test]
fn null_optional_fields_read_as_empty() {
    let raw = json!([{
        "id": "x", "subject": "s", "from": { "name": "A", "email": "a@x" },
        "date": "2024-08-01", "folder": "Inbox", "body": "b",
        "cc": null, "starred": null, "tags": null, "attachments": null, "unread": null
    }]);
    let messages = parse_scenario(&raw.to_string()).unwrap();
    let m = &messages[0];
    assert!(m.cc.is_empty());
    assert!(!m.starred);
    assert!(!m.unread);
    assert!(m.tags.is_empty());
    assert!(m.attachments.is_empty());
    assert!(m.extra.is_empty());
}

#[test]
fn numeric_ids_are_kept_as_strings() {
    let raw = json!([
        { "id": 1, "subject": "s", "from": { "name": "A", "email": "a@x" }, "date": "d", "folder": "Inbox", "body": "b" },
        { "id": 2, "subject": "s", "from": { "name": "A", "email": "a@x" }, "date": "d", "folder": "Inbox", "body": "b" }
    ]);
    let messages = parse_scenario(&raw.to_string()).unwrap();
    assert_eq!(messages[0].id, "1");
    assert_eq!(messages[1].id, "2");

    let clash = json!([
        { "id": 7, "subject": "s", "from": { "name": "A", "email": "a@x" }, "date": "d", "folder": "Inbox", "body": "b" },
        { "id": "7", "subject": "s", "from": { "name": "A", "email": "a@x" }, "date": "d", "folder": "Inbox", "body": "b" }
    ]);
    assert!(matches!(
        parse_scenario(&clash.to_string()),
        Err(ImportError::DuplicateId { index: 1, .. })
    ));
}

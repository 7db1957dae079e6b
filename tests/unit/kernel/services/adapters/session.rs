use super::*;
use crate::kernel::services::adapters::storage::MemoryStorage;
use crate::models::Role;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);
const DAY_MS: u64 = 24 * 60 * 60 * 1000;

fn store() -> SessionStore {
    SessionStore::new(Box::new(MemoryStorage::new()), DAY)
}

fn tab(id: &str, title: &str, closable: bool) -> PersistedTab {
    PersistedTab {
        id: ProgramId::from(id),
        title: title.to_string(),
        closable,
    }
}

#[test]
fn saved_session_loads_back() {
    let mut store = store();
    let session = PersistedSession {
        tabs: vec![tab("dashboard", "대시보드", false), tab("6", "수주등록", true)],
        active: ProgramId::from("6"),
    };
    store.save_session(&session).unwrap();

    assert_eq!(store.load_session(), Some(session));
}

#[test]
fn nothing_saved_loads_none() {
    assert_eq!(store().load_session(), None);
}

#[test]
fn malformed_tab_list_loads_none() {
    let mut storage = MemoryStorage::new();
    storage.set(OPEN_TABS_KEY, "{oops".to_string()).unwrap();
    storage.set(ACTIVE_TAB_KEY, "6".to_string()).unwrap();
    let store = SessionStore::new(Box::new(storage), DAY);

    assert_eq!(store.load_session(), None);
}

#[test]
fn missing_active_tab_falls_back_to_dashboard() {
    let mut storage = MemoryStorage::new();
    storage
        .set(OPEN_TABS_KEY, r#"[{"id":"6","title":"수주등록","closable":true}]"#.to_string())
        .unwrap();
    let store = SessionStore::new(Box::new(storage), DAY);

    let session = store.load_session().unwrap();
    assert_eq!(session.active, ProgramId::dashboard());
    assert_eq!(session.tabs, vec![tab("6", "수주등록", true)]);
}

#[test]
fn auth_record_round_trips_until_expiry() {
    let mut store = store();
    let user = Principal::new("lee", "C01", Role::Admin);
    let saved = store.save_auth(user.clone(), "t0k".to_string(), 1_000).unwrap();
    assert_eq!(saved.expires_at, 1_000 + DAY_MS);

    let loaded = store.load_auth(1_000 + DAY_MS - 1).unwrap();
    assert_eq!(loaded.user, user);
    assert_eq!(loaded.token, "t0k");
}

#[test]
fn expired_auth_is_deleted_on_read() {
    let mut store = store();
    store
        .save_auth(Principal::new("lee", "C01", Role::User), "t".to_string(), 0)
        .unwrap();

    assert_eq!(store.load_auth(DAY_MS), None);
    // Gone for good, even if the clock went backwards.
    assert_eq!(store.load_auth(0), None);
}

#[test]
fn malformed_auth_is_deleted_on_read() {
    let mut storage = MemoryStorage::new();
    storage.set(AUTH_KEY, "{\"user\":1}".to_string()).unwrap();
    let mut store = SessionStore::new(Box::new(storage), DAY);

    assert_eq!(store.load_auth(0), None);
    assert_eq!(store.storage.get(AUTH_KEY).unwrap(), None);
}

#[test]
fn auth_record_uses_expires_at_key() {
    let record = AuthRecord {
        user: Principal::new("lee", "C01", Role::User),
        token: "t".to_string(),
        expires_at: 42,
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["expiresAt"], 42);
    assert_eq!(value["user"]["role"], "user");
}

#[test]
fn clear_session_removes_tabs_active_and_auth() {
    let mut store = store();
    store
        .save_session(&PersistedSession {
            tabs: vec![tab("6", "수주등록", true)],
            active: ProgramId::from("6"),
        })
        .unwrap();
    store
        .save_auth(Principal::new("lee", "C01", Role::User), "t".to_string(), 0)
        .unwrap();

    store.clear_session();

    assert_eq!(store.load_session(), None);
    assert_eq!(store.load_auth(0), None);
}

fn saved_tabs(store: &mut SessionStore) {
    store
        .save_session(&PersistedSession {
            tabs: vec![tab("6", "수주등록", true)],
            active: ProgramId::from("6"),
        })
        .unwrap();
}

#[test]
fn claiming_own_workspace_keeps_tabs() {
    let mut store = store();
    store.claim_workspace("lee");
    saved_tabs(&mut store);

    store.claim_workspace("lee");
    assert_eq!(store.load_session().map(|s| s.active), Some(ProgramId::from("6")));
}

#[test]
fn claiming_another_users_workspace_drops_tabs() {
    let mut store = store();
    store.claim_workspace("lee");
    saved_tabs(&mut store);

    store.claim_workspace("kim");
    assert_eq!(store.load_session(), None);
    assert_eq!(store.storage.get(TABS_OWNER_KEY).unwrap().as_deref(), Some("kim"));
}

#[test]
fn tabs_without_recorded_owner_are_not_handed_out() {
    let mut store = store();
    saved_tabs(&mut store);

    store.claim_workspace("kim");
    assert_eq!(store.load_session(), None);
}

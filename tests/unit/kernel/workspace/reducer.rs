use super::*;
use crate::kernel::program::{Screen, ScreenKind};

fn request_from(effects: &[Effect]) -> ResolveRequest {
    match effects {
        [Effect::ResolveProgram(request)] => request.clone(),
        other => panic!("expected a single ResolveProgram effect, got {other:?}"),
    }
}

fn screen(id: &str) -> Screen {
    Screen::new(ScreenKind::ItemManagement, ProgramId::from(id))
}

fn open(ws: &mut WorkspaceState, id: &str) {
    let (_, effects) = ws.dispatch_action(WorkspaceAction::Open {
        id: ProgramId::from(id),
        title: id.to_string(),
    });
    if effects.iter().any(|e| matches!(e, Effect::PersistWorkspace(_))) {
        return;
    }
    let request = request_from(&effects);
    let _ = ws.dispatch_action(WorkspaceAction::Resolved {
        request,
        resolution: Resolution::Found(screen(id)),
    });
}

fn ids(ws: &WorkspaceState) -> Vec<&str> {
    ws.tabs().iter().map(|tab| tab.id.as_str()).collect()
}

fn workspace_with(tabs: &[&str]) -> WorkspaceState {
    let mut ws = WorkspaceState::new("대시보드");
    for id in tabs {
        open(&mut ws, id);
    }
    ws
}

fn persisted(effects: &[Effect]) -> Option<&crate::kernel::workspace::PersistedSession> {
    effects.iter().find_map(|e| match e {
        Effect::PersistWorkspace(session) => Some(session),
        _ => None,
    })
}

#[test]
fn open_new_program_resolves_before_mutating() {
    let mut ws = WorkspaceState::new("대시보드");
    let (changed, effects) = ws.dispatch_action(WorkspaceAction::Open {
        id: ProgramId::from("6"),
        title: "수주등록".to_string(),
    });
    assert!(!changed);
    let request = request_from(&effects);
    assert_eq!(request.program, ProgramId::from("6"));
    assert_eq!(ws.len(), 1);

    let (changed, effects) = ws.dispatch_action(WorkspaceAction::Resolved {
        request,
        resolution: Resolution::Found(screen("6")),
    });
    assert!(changed);
    assert_eq!(ids(&ws), vec!["dashboard", "6"]);
    assert_eq!(ws.active_id(), &ProgramId::from("6"));
    assert!(ws.active_tab().unwrap().closable);

    let session = persisted(&effects).expect("persist after open");
    assert_eq!(session.active, ProgramId::from("6"));
    assert_eq!(session.tabs.len(), 2);
}

#[test]
fn reopening_dashboard_is_idempotent() {
    let mut ws = workspace_with(&["A"]);
    let before = ws.len();
    let (_, effects) = ws.dispatch_action(WorkspaceAction::Open {
        id: ProgramId::dashboard(),
        title: "대시보드".to_string(),
    });
    assert_eq!(ws.len(), before);
    assert_eq!(ws.active_id(), &ProgramId::dashboard());
    assert!(persisted(&effects).is_some());
    assert!(!effects.iter().any(|e| matches!(e, Effect::ResolveProgram(_))));
}

#[test]
fn reopening_open_program_only_activates_it() {
    let mut ws = workspace_with(&["A", "B"]);
    open(&mut ws, "A");
    assert_eq!(ids(&ws), vec!["dashboard", "A", "B"]);
    assert_eq!(ws.active_id(), &ProgramId::from("A"));
}

#[test]
fn concurrent_opens_of_same_program_do_not_duplicate() {
    let mut ws = WorkspaceState::new("대시보드");
    let open_a = || WorkspaceAction::Open {
        id: ProgramId::from("A"),
        title: "A".to_string(),
    };
    let first = request_from(&ws.dispatch_action(open_a()).1);
    let second = request_from(&ws.dispatch_action(open_a()).1);
    assert_ne!(first.request_id, second.request_id);

    let _ = ws.dispatch_action(WorkspaceAction::Resolved {
        request: second,
        resolution: Resolution::Found(screen("A")),
    });
    let _ = ws.dispatch_action(WorkspaceAction::Select {
        id: ProgramId::dashboard(),
    });
    let (_, effects) = ws.dispatch_action(WorkspaceAction::Resolved {
        request: first,
        resolution: Resolution::Found(screen("A")),
    });

    assert_eq!(ids(&ws), vec!["dashboard", "A"]);
    assert_eq!(ws.active_id(), &ProgramId::from("A"));
    assert!(persisted(&effects).is_some());
}

#[test]
fn concurrent_opens_of_different_programs_both_land() {
    let mut ws = WorkspaceState::new("대시보드");
    let a = request_from(
        &ws.dispatch_action(WorkspaceAction::Open {
            id: ProgramId::from("A"),
            title: "A".to_string(),
        })
        .1,
    );
    let b = request_from(
        &ws.dispatch_action(WorkspaceAction::Open {
            id: ProgramId::from("B"),
            title: "B".to_string(),
        })
        .1,
    );
    for request in [b, a] {
        let id = request.program.as_str().to_string();
        let _ = ws.dispatch_action(WorkspaceAction::Resolved {
            request,
            resolution: Resolution::Found(screen(&id)),
        });
    }
    assert_eq!(ids(&ws), vec!["dashboard", "B", "A"]);
    assert_eq!(ws.active_id(), &ProgramId::from("A"));
}

#[test]
fn not_found_notifies_without_touching_state() {
    let mut ws = workspace_with(&["A"]);
    let request = request_from(
        &ws.dispatch_action(WorkspaceAction::Open {
            id: ProgramId::from("404"),
            title: "없는화면".to_string(),
        })
        .1,
    );
    let (changed, effects) = ws.dispatch_action(WorkspaceAction::Resolved {
        request,
        resolution: Resolution::NotFound,
    });
    assert!(!changed);
    assert_eq!(ids(&ws), vec!["dashboard", "A"]);
    assert_eq!(ws.active_id(), &ProgramId::from("A"));
    assert!(matches!(
        effects.as_slice(),
        [Effect::Notify(Notice::ProgramNotFound { program, .. })] if program.as_str() == "404"
    ));
}

#[test]
fn resolution_from_previous_generation_is_discarded() {
    let mut ws = WorkspaceState::new("대시보드");
    let request = request_from(
        &ws.dispatch_action(WorkspaceAction::Open {
            id: ProgramId::from("A"),
            title: "A".to_string(),
        })
        .1,
    );
    ws.reset();
    let (changed, effects) = ws.dispatch_action(WorkspaceAction::Resolved {
        request,
        resolution: Resolution::Found(screen("A")),
    });
    assert!(!changed);
    assert!(effects.is_empty());
    assert_eq!(ids(&ws), vec!["dashboard"]);
}

fn restored(id: &str) -> crate::kernel::workspace::RestoredTab {
    crate::kernel::workspace::RestoredTab {
        entry: crate::kernel::workspace::PersistedTab {
            id: ProgramId::from(id),
            title: id.to_string(),
            closable: true,
        },
        resolution: Resolution::Found(screen(id)),
    }
}

#[test]
fn tab_opened_before_restore_lands_is_kept_and_stays_active() {
    let mut ws = WorkspaceState::new("대시보드");
    ws.reset();
    open(&mut ws, "6");
    assert_eq!(ids(&ws), vec!["dashboard", "6"]);

    let (changed, effects) = ws.dispatch_action(WorkspaceAction::Restored {
        generation: ws.generation(),
        active: ProgramId::from("1"),
        entries: vec![restored("1")],
    });
    assert!(changed);
    assert_eq!(ids(&ws), vec!["dashboard", "1", "6"]);
    assert_eq!(ws.active_id(), &ProgramId::from("6"));

    let session = persisted(&effects).unwrap();
    let stored: Vec<&str> = session.tabs.iter().map(|tab| tab.id.as_str()).collect();
    assert_eq!(stored, vec!["dashboard", "1", "6"]);
}

#[test]
fn restore_keeps_saved_active_when_user_went_back_to_dashboard() {
    let mut ws = workspace_with(&["6"]);
    assert!(ws.select(&ProgramId::dashboard()));

    let _ = ws.dispatch_action(WorkspaceAction::Restored {
        generation: ws.generation(),
        active: ProgramId::from("1"),
        entries: vec![restored("1"), restored("6")],
    });
    assert_eq!(ids(&ws), vec!["dashboard", "1", "6"]);
    assert_eq!(ws.active_id(), &ProgramId::from("1"));
}

#[test]
fn closing_active_middle_tab_activates_the_one_that_slid_in() {
    let mut ws = workspace_with(&["A", "B", "C"]);
    assert!(ws.select(&ProgramId::from("B")));

    let (changed, effects) = ws.dispatch_action(WorkspaceAction::Close {
        id: ProgramId::from("B"),
    });
    assert!(changed);
    assert_eq!(ids(&ws), vec!["dashboard", "A", "C"]);
    assert_eq!(ws.active_id(), &ProgramId::from("C"));
    assert_eq!(persisted(&effects).unwrap().active, ProgramId::from("C"));
}

#[test]
fn closing_active_last_tab_activates_new_last() {
    let mut ws = workspace_with(&["A", "B", "C"]);
    assert_eq!(ws.active_id(), &ProgramId::from("C"));

    assert!(ws.close(&ProgramId::from("C")));
    assert_eq!(ids(&ws), vec!["dashboard", "A", "B"]);
    assert_eq!(ws.active_id(), &ProgramId::from("B"));
}

#[test]
fn closing_inactive_tab_keeps_active() {
    let mut ws = workspace_with(&["A", "B", "C"]);
    assert!(ws.close(&ProgramId::from("A")));
    assert_eq!(ids(&ws), vec!["dashboard", "B", "C"]);
    assert_eq!(ws.active_id(), &ProgramId::from("C"));
}

#[test]
fn closing_only_program_tab_falls_back_to_dashboard() {
    let mut ws = workspace_with(&["A"]);
    assert!(ws.close(&ProgramId::from("A")));
    assert_eq!(ids(&ws), vec!["dashboard"]);
    assert_eq!(ws.active_id(), &ProgramId::dashboard());
}

#[test]
fn dashboard_cannot_be_closed() {
    let mut ws = workspace_with(&["A"]);
    assert!(ws.select(&ProgramId::dashboard()));
    let (changed, effects) = ws.dispatch_action(WorkspaceAction::Close {
        id: ProgramId::dashboard(),
    });
    assert!(!changed);
    assert!(effects.is_empty());
    assert_eq!(ids(&ws), vec!["dashboard", "A"]);
    assert_eq!(ws.active_id(), &ProgramId::dashboard());
}

#[test]
fn closing_unknown_tab_is_noop() {
    let mut ws = workspace_with(&["A"]);
    assert!(!ws.close(&ProgramId::from("Z")));
    assert_eq!(ws.len(), 2);
}

#[test]
fn select_persists_and_ignores_unknown_ids() {
    let mut ws = workspace_with(&["A", "B"]);
    let (changed, effects) = ws.dispatch_action(WorkspaceAction::Select {
        id: ProgramId::from("A"),
    });
    assert!(changed);
    assert_eq!(persisted(&effects).unwrap().active, ProgramId::from("A"));

    let (changed, effects) = ws.dispatch_action(WorkspaceAction::Select {
        id: ProgramId::from("Z"),
    });
    assert!(!changed);
    assert!(effects.is_empty());
    assert_eq!(ws.active_id(), &ProgramId::from("A"));
}

#[test]
fn close_others_keeps_dashboard_and_target() {
    let mut ws = workspace_with(&["A", "B", "C"]);
    assert!(ws.close_others(&ProgramId::from("B")));
    assert_eq!(ids(&ws), vec!["dashboard", "B"]);
    assert_eq!(ws.active_id(), &ProgramId::from("B"));
    assert!(!ws.close_others(&ProgramId::from("Z")));
}

#[test]
fn close_all_leaves_only_dashboard_active() {
    let mut ws = workspace_with(&["A", "B"]);
    let (changed, effects) = ws.dispatch_action(WorkspaceAction::CloseAll);
    assert!(changed);
    assert_eq!(ids(&ws), vec!["dashboard"]);
    assert_eq!(ws.active_id(), &ProgramId::dashboard());
    assert!(persisted(&effects).is_some());

    let (changed, _) = ws.dispatch_action(WorkspaceAction::CloseAll);
    assert!(!changed);
}

#[test]
fn next_and_prev_wrap_around() {
    let mut ws = workspace_with(&["A", "B"]);
    assert!(ws.next_tab());
    assert_eq!(ws.active_id(), &ProgramId::dashboard());
    assert!(ws.prev_tab());
    assert_eq!(ws.active_id(), &ProgramId::from("B"));

    let mut single = WorkspaceState::new("대시보드");
    assert!(!single.next_tab());
    assert!(!single.prev_tab());
}

#[test]
fn active_always_names_an_open_tab() {
    let mut ws = workspace_with(&["A", "B", "C", "D"]);
    let script = ["B", "D", "dashboard", "A", "C"];
    for id in script {
        let _ = ws.dispatch_action(WorkspaceAction::Close {
            id: ProgramId::from(id),
        });
        assert!(ws.contains(ws.active_id()), "dangling active after closing {id}");
        assert!(ws.contains(&ProgramId::dashboard()));
    }
    assert_eq!(ids(&ws), vec!["dashboard"]);
}

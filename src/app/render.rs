//! Plain-text rendering of the sidebar and the tab strip.

use crate::kernel::menu::{MenuRowKind, SidebarState};
use crate::kernel::workspace::WorkspaceState;
use crate::kernel::AppState;

const INDENT: &str = "  ";

pub fn render_menu(sidebar: &SidebarState) -> String {
    if !sidebar.is_loaded() {
        return "(메뉴 로딩 중)".to_string();
    }
    if sidebar.is_empty() {
        return "(사용 가능한 메뉴가 없습니다)".to_string();
    }

    let mut out = String::new();
    for row in sidebar.rows() {
        let marker = match row.kind {
            MenuRowKind::Leaf => "-",
            MenuRowKind::Branch { expanded: true } => "▾",
            MenuRowKind::Branch { expanded: false } => "▸",
        };
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&INDENT.repeat(row.depth));
        out.push_str(&format!("{} {} {}", marker, row.id, row.title));
    }
    out
}

/// One line; the active tab is bracketed and closable tabs carry `×`.
pub fn render_tabs(workspace: &WorkspaceState) -> String {
    workspace
        .tabs()
        .iter()
        .map(|tab| {
            let label = if tab.closable {
                format!("{}:{} ×", tab.id, tab.title)
            } else {
                format!("{}:{}", tab.id, tab.title)
            };
            if &tab.id == workspace.active_id() {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

pub fn render_status(state: &AppState) -> String {
    match &state.principal {
        Some(principal) => format!(
            "{} ({}, {}) · tabs {}",
            principal.id,
            principal.role,
            principal.company_id,
            state.workspace.len()
        ),
        None => "로그아웃 상태".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;

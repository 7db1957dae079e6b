use rustc_hash::FxHashSet;

use super::authorization::ProgramAuthorization;
use super::filter::filter_for;
use crate::models::{find_in, MenuId, MenuNode, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuRowKind {
    Leaf,
    Branch { expanded: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuRow {
    pub id: MenuId,
    pub depth: usize,
    pub title: String,
    pub kind: MenuRowKind,
}

/// Navigable sidebar. `visible` is always a filtered copy of `full`; it stays
/// empty until an authorization has been applied.
#[derive(Debug)]
pub struct SidebarState {
    full: Vec<MenuNode>,
    visible: Vec<MenuNode>,
    authorization: Option<ProgramAuthorization>,
    expanded: FxHashSet<MenuId>,
}

impl SidebarState {
    pub fn new(full: Vec<MenuNode>) -> Self {
        Self {
            full,
            visible: Vec::new(),
            authorization: None,
            expanded: FxHashSet::default(),
        }
    }

    pub fn visible(&self) -> &[MenuNode] {
        &self.visible
    }

    pub fn authorization(&self) -> Option<&ProgramAuthorization> {
        self.authorization.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.authorization.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn apply_authorization(&mut self, role: Role, authorization: ProgramAuthorization) -> bool {
        let visible = filter_for(&self.full, role, &authorization);
        let changed = visible != self.visible || self.authorization.is_none();
        self.visible = visible;
        self.authorization = Some(authorization);
        let visible = &self.visible;
        self.expanded.retain(|id| find_in(visible, *id).is_some());
        changed
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.authorization.is_some() || !self.visible.is_empty();
        self.visible.clear();
        self.authorization = None;
        self.expanded.clear();
        changed
    }

    pub fn find(&self, id: MenuId) -> Option<&MenuNode> {
        find_in(&self.visible, id)
    }

    pub fn is_expanded(&self, id: MenuId) -> bool {
        self.expanded.contains(&id)
    }

    /// Only branches toggle; leaves and unknown ids are ignored.
    pub fn toggle(&mut self, id: MenuId) -> bool {
        match self.find(id) {
            Some(MenuNode::Branch(_)) => {
                if !self.expanded.remove(&id) {
                    self.expanded.insert(id);
                }
                true
            }
            _ => false,
        }
    }

    pub fn rows(&self) -> Vec<MenuRow> {
        let mut rows = Vec::new();
        for node in &self.visible {
            self.push_rows(node, 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, node: &MenuNode, depth: usize, rows: &mut Vec<MenuRow>) {
        let expanded = self.is_expanded(node.id());
        rows.push(MenuRow {
            id: node.id(),
            depth,
            title: node.title().to_string(),
            kind: if node.is_leaf() {
                MenuRowKind::Leaf
            } else {
                MenuRowKind::Branch { expanded }
            },
        });
        if expanded {
            for child in node.children() {
                self.push_rows(child, depth + 1, rows);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/menu/sidebar.rs"]
mod tests;

//! 菜单树数据模型
//!
//! A node is either a leaf bound to a program or a branch with at least one
//! child. `MenuBranch::new` refuses empty children, so an empty group cannot
//! be represented.

use std::fmt;

use super::ProgramId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(u32);

impl MenuId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuLeaf {
    pub id: MenuId,
    pub title: String,
    pub program_id: ProgramId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuBranch {
    id: MenuId,
    title: String,
    children: Vec<MenuNode>,
}

impl MenuBranch {
    pub fn new(id: MenuId, title: impl Into<String>, children: Vec<MenuNode>) -> Option<Self> {
        if children.is_empty() {
            return None;
        }
        Some(Self {
            id,
            title: title.into(),
            children,
        })
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuNode {
    Leaf(MenuLeaf),
    Branch(MenuBranch),
}

impl MenuNode {
    pub fn leaf(id: u32, title: impl Into<String>, program_id: impl Into<ProgramId>) -> Self {
        MenuNode::Leaf(MenuLeaf {
            id: MenuId::new(id),
            title: title.into(),
            program_id: program_id.into(),
        })
    }

    /// `None` when `children` is empty.
    pub fn branch(id: u32, title: impl Into<String>, children: Vec<MenuNode>) -> Option<Self> {
        MenuBranch::new(MenuId::new(id), title, children).map(MenuNode::Branch)
    }

    pub fn id(&self) -> MenuId {
        match self {
            MenuNode::Leaf(leaf) => leaf.id,
            MenuNode::Branch(branch) => branch.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MenuNode::Leaf(leaf) => &leaf.title,
            MenuNode::Branch(branch) => &branch.title,
        }
    }

    pub fn program_id(&self) -> Option<&ProgramId> {
        match self {
            MenuNode::Leaf(leaf) => Some(&leaf.program_id),
            MenuNode::Branch(_) => None,
        }
    }

    pub fn children(&self) -> &[MenuNode] {
        match self {
            MenuNode::Leaf(_) => &[],
            MenuNode::Branch(branch) => &branch.children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, MenuNode::Leaf(_))
    }

    /// Depth-first search by menu id.
    pub fn find(&self, id: MenuId) -> Option<&MenuNode> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }
}

pub fn find_in(nodes: &[MenuNode], id: MenuId) -> Option<&MenuNode> {
    nodes.iter().find_map(|node| node.find(id))
}

#[cfg(test)]
#[path = "../../tests/unit/models/menu.rs"]
mod tests;

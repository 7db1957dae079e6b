use rustc_hash::FxHashSet;

use super::authorization::ProgramAuthorization;
use crate::models::{MenuBranch, MenuNode, ProgramId, Role};

/// Prunes `full_tree` down to what `role` may see. Super-admins get the tree
/// back untouched; everybody else keeps a leaf only when its program is in
/// `authorized`, and a branch only while at least one child survives.
/// Sibling order is preserved.
pub fn filter_menu(
    full_tree: &[MenuNode],
    role: Role,
    authorized: &FxHashSet<ProgramId>,
) -> Vec<MenuNode> {
    if role.bypasses_authorization() {
        return full_tree.to_vec();
    }
    full_tree
        .iter()
        .filter_map(|node| prune(node, authorized))
        .collect()
}

pub fn filter_for(
    full_tree: &[MenuNode],
    role: Role,
    authorization: &ProgramAuthorization,
) -> Vec<MenuNode> {
    match authorization {
        ProgramAuthorization::Unrestricted => full_tree.to_vec(),
        ProgramAuthorization::Only(set) => filter_menu(full_tree, role, set),
    }
}

fn prune(node: &MenuNode, authorized: &FxHashSet<ProgramId>) -> Option<MenuNode> {
    match node {
        MenuNode::Leaf(leaf) => authorized
            .contains(&leaf.program_id)
            .then(|| node.clone()),
        MenuNode::Branch(branch) => {
            let children = branch
                .children()
                .iter()
                .filter_map(|child| prune(child, authorized))
                .collect();
            MenuBranch::new(branch.id(), branch.title(), children).map(MenuNode::Branch)
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/menu/filter.rs"]
mod tests;

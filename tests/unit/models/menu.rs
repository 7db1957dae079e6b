use super::*;

fn sample() -> MenuNode {
    MenuNode::branch(
        1,
        "수주관리",
        vec![MenuNode::leaf(2, "수주등록", "6"), MenuNode::leaf(3, "수주현황", "7")],
    )
    .unwrap()
}

#[test]
fn branch_requires_children() {
    assert!(MenuNode::branch(1, "empty", Vec::new()).is_none());
    assert!(MenuBranch::new(MenuId::new(1), "empty", Vec::new()).is_none());
}

#[test]
fn leaf_carries_program_and_no_children() {
    let leaf = MenuNode::leaf(5, "회사관리", "1");
    assert!(leaf.is_leaf());
    assert_eq!(leaf.program_id().map(ProgramId::as_str), Some("1"));
    assert!(leaf.children().is_empty());
}

#[test]
fn find_descends_into_children() {
    let tree = sample();
    assert_eq!(tree.find(MenuId::new(3)).map(MenuNode::title), Some("수주현황"));
    assert!(tree.find(MenuId::new(99)).is_none());
    assert!(find_in(std::slice::from_ref(&tree), MenuId::new(1)).is_some());
}

#[test]
fn branch_children_keep_insertion_order() {
    let tree = sample();
    let ids: Vec<_> = tree
        .children()
        .iter()
        .filter_map(MenuNode::program_id)
        .map(ProgramId::as_str)
        .collect();
    assert_eq!(ids, vec!["6", "7"]);
}

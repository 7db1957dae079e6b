//! 完整菜单树（硬编码，运行时按用户过滤）

use crate::models::MenuNode;

pub fn full_menu() -> Vec<MenuNode> {
    [
        MenuNode::branch(
            100,
            "기준정보관리",
            vec![
                MenuNode::leaf(101, "회사관리", "1"),
                MenuNode::leaf(102, "품목관리", "2"),
                MenuNode::leaf(103, "공통코드관리", "3"),
            ],
        ),
        MenuNode::branch(
            200,
            "시스템관리",
            vec![
                MenuNode::leaf(201, "사용자관리", "4"),
                MenuNode::leaf(202, "프로그램관리", "5"),
                MenuNode::leaf(203, "메뉴관리", "10"),
            ],
        ),
        MenuNode::branch(
            300,
            "수주관리",
            vec![
                MenuNode::leaf(301, "수주등록", "6"),
                MenuNode::leaf(302, "수주현황", "7"),
            ],
        ),
        MenuNode::branch(
            400,
            "출고관리",
            vec![
                MenuNode::leaf(401, "출고등록", "8"),
                MenuNode::leaf(402, "출고현황", "9"),
            ],
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

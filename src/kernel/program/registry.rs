use rustc_hash::FxHashMap;

use crate::models::{ProgramId, ProgramRecord};

const KNOWN_EXTENSIONS: [&str; 4] = [".jsx", ".tsx", ".js", ".ts"];
const KNOWN_PREFIXES: [&str; 3] = ["src/", "pages/", "screens/"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Dashboard,
    CompanyManagement,
    ItemManagement,
    CommonCodeManagement,
    UserManagement,
    ProgramManagement,
    MenuManagement,
    OrderRegistration,
    OrderStatus,
    ShipmentRegistration,
    ShipmentStatus,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 11] = [
        ScreenKind::Dashboard,
        ScreenKind::CompanyManagement,
        ScreenKind::ItemManagement,
        ScreenKind::CommonCodeManagement,
        ScreenKind::UserManagement,
        ScreenKind::ProgramManagement,
        ScreenKind::MenuManagement,
        ScreenKind::OrderRegistration,
        ScreenKind::OrderStatus,
        ScreenKind::ShipmentRegistration,
        ScreenKind::ShipmentStatus,
    ];

    pub fn module_name(self) -> &'static str {
        match self {
            ScreenKind::Dashboard => "Dashboard",
            ScreenKind::CompanyManagement => "CompanyManagement",
            ScreenKind::ItemManagement => "ItemManagement",
            ScreenKind::CommonCodeManagement => "CommonCodeManagement",
            ScreenKind::UserManagement => "UserManagement",
            ScreenKind::ProgramManagement => "ProgramManagement",
            ScreenKind::MenuManagement => "MenuManagement",
            ScreenKind::OrderRegistration => "OrderRegistration",
            ScreenKind::OrderStatus => "OrderStatus",
            ScreenKind::ShipmentRegistration => "ShipmentRegistration",
            ScreenKind::ShipmentStatus => "ShipmentStatus",
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            ScreenKind::Dashboard => "대시보드",
            ScreenKind::CompanyManagement => "회사관리",
            ScreenKind::ItemManagement => "품목관리",
            ScreenKind::CommonCodeManagement => "공통코드관리",
            ScreenKind::UserManagement => "사용자관리",
            ScreenKind::ProgramManagement => "프로그램관리",
            ScreenKind::MenuManagement => "메뉴관리",
            ScreenKind::OrderRegistration => "수주등록",
            ScreenKind::OrderStatus => "수주현황",
            ScreenKind::ShipmentRegistration => "출고등록",
            ScreenKind::ShipmentStatus => "출고현황",
        }
    }

    pub fn from_module_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.module_name() == name)
    }
}

/// Runtime handle of a loaded screen. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    kind: ScreenKind,
    program: ProgramId,
}

impl Screen {
    pub fn new(kind: ScreenKind, program: ProgramId) -> Self {
        Self { kind, program }
    }

    pub fn dashboard() -> Self {
        Self::new(ScreenKind::Dashboard, ProgramId::dashboard())
    }

    pub fn kind(&self) -> ScreenKind {
        self.kind
    }

    pub fn program(&self) -> &ProgramId {
        &self.program
    }
}

/// Strips a leading `./` or `/`, the known directory prefixes (in order) and
/// one known file extension: `./src/pages/ItemManagement.jsx` -> `ItemManagement`.
pub fn normalize_program_path(path: &str) -> &str {
    let mut name = path.trim();
    name = name
        .strip_prefix("./")
        .or_else(|| name.strip_prefix('/'))
        .unwrap_or(name);
    for prefix in KNOWN_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            name = rest;
        }
    }
    for ext in KNOWN_EXTENSIONS {
        if let Some(rest) = name.strip_suffix(ext) {
            name = rest;
            break;
        }
    }
    name
}

/// Program id -> path table built from the program service records.
#[derive(Debug, Default, Clone)]
pub struct ProgramRegistry {
    paths: FxHashMap<ProgramId, String>,
}

impl ProgramRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = ProgramRecord>) -> Self {
        let mut registry = Self::new();
        for record in records {
            registry.insert(record.id, record.path);
        }
        registry
    }

    pub fn insert(&mut self, id: ProgramId, path: String) {
        self.paths.insert(id, path);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn path_of(&self, id: &ProgramId) -> Option<&str> {
        self.paths.get(id).map(String::as_str)
    }

    /// Unknown ids fall back to being treated as a path themselves.
    pub fn lookup(&self, id: &ProgramId) -> Option<ScreenKind> {
        if id.is_dashboard() {
            return Some(ScreenKind::Dashboard);
        }
        let path = self.path_of(id).unwrap_or(id.as_str());
        ScreenKind::from_module_name(normalize_program_path(path))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/program/registry.rs"]
mod tests;

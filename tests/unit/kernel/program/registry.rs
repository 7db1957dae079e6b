use super::*;

#[test]
fn normalize_strips_prefixes_and_extension() {
    assert_eq!(normalize_program_path("pages/ItemManagement.jsx"), "ItemManagement");
    assert_eq!(normalize_program_path("./src/pages/UserManagement.js"), "UserManagement");
    assert_eq!(normalize_program_path("/screens/OrderStatus.tsx"), "OrderStatus");
    assert_eq!(normalize_program_path("CompanyManagement"), "CompanyManagement");
}

#[test]
fn normalize_strips_only_one_extension() {
    assert_eq!(normalize_program_path("pages/Odd.js.jsx"), "Odd.js");
}

#[test]
fn dashboard_is_always_registered() {
    let registry = ProgramRegistry::new();
    assert_eq!(registry.lookup(&ProgramId::dashboard()), Some(ScreenKind::Dashboard));
}

#[test]
fn lookup_goes_through_record_path() {
    let registry = ProgramRegistry::from_records([ProgramRecord {
        id: ProgramId::from("6"),
        name: "수주등록".to_string(),
        path: "pages/OrderRegistration.jsx".to_string(),
        description: None,
        created_at: None,
        updated_at: None,
    }]);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.lookup(&ProgramId::from("6")), Some(ScreenKind::OrderRegistration));
}

#[test]
fn unknown_ids_fall_back_to_module_names() {
    let registry = ProgramRegistry::new();
    assert_eq!(
        registry.lookup(&ProgramId::from("ShipmentStatus.jsx")),
        Some(ScreenKind::ShipmentStatus)
    );
    assert_eq!(registry.lookup(&ProgramId::from("42")), None);
}

#[test]
fn registered_path_to_missing_module_is_a_miss() {
    let mut registry = ProgramRegistry::new();
    registry.insert(ProgramId::from("7"), "pages/Removed.jsx".to_string());
    assert_eq!(registry.lookup(&ProgramId::from("7")), None);
}

#[test]
fn module_names_are_unique() {
    for kind in ScreenKind::ALL {
        assert_eq!(ScreenKind::from_module_name(kind.module_name()), Some(kind));
    }
}

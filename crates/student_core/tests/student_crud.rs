use student_core::{
    InMemoryStudentRepository, Student, StudentRepository, StudentService, StudentServiceError,
};

fn new_service() -> StudentService<InMemoryStudentRepository> {
    StudentService::new(InMemoryStudentRepository::new())
}

fn ana() -> Student {
    Student::new("A1", "Ana Lopez", 20)
}

#[test]
fn add_then_list_returns_the_record() {
    let mut service = new_service();
    service.add(Some(&ana())).unwrap();

    assert_eq!(service.list(), vec![ana()]);
}

#[test]
fn duplicate_add_fails_and_keeps_first_record() {
    let mut service = new_service();
    service.add(Some(&ana())).unwrap();

    let err = service
        .add(Some(&Student::new("A1", "Other", 22)))
        .unwrap_err();
    assert_eq!(err, StudentServiceError::IdAlreadyExists);
    assert_eq!(err.to_string(), "id already exists");
    assert_eq!(service.list(), vec![ana()]);
}

#[test]
fn add_with_empty_id_is_rejected() {
    let mut service = new_service();
    let err = service.add(Some(&Student::new("", "X", 20))).unwrap_err();

    assert_eq!(err.to_string(), "id is required");
    assert!(service.list().is_empty());
}

#[test]
fn edit_updates_names_and_age() {
    let mut service = new_service();
    service.add(Some(&ana())).unwrap();

    service
        .edit(Some(&Student::new("A1", "Ana M. Lopez", 21)))
        .unwrap();

    let loaded = service.get("A1").unwrap();
    assert_eq!(loaded.id, "A1");
    assert_eq!(loaded.names, "Ana M. Lopez");
    assert_eq!(loaded.age, 21);
}

#[test]
fn edit_accepts_blank_names() {
    let mut service = new_service();
    service.add(Some(&ana())).unwrap();

    service.edit(Some(&Student::new("A1", "", 21))).unwrap();
    assert_eq!(service.get("A1").unwrap().names, "");
}

#[test]
fn edit_rejects_non_positive_age_before_lookup() {
    let mut service = new_service();
    let err = service
        .edit(Some(&Student::new("missing", "Ana", 0)))
        .unwrap_err();
    assert_eq!(err, StudentServiceError::AgeNotPositive);
}

#[test]
fn edit_unknown_id_changes_nothing() {
    let mut service = new_service();
    service.add(Some(&ana())).unwrap();

    let err = service
        .edit(Some(&Student::new("Z9", "Zed", 40)))
        .unwrap_err();
    assert_eq!(err.to_string(), "no student with that id");
    assert_eq!(service.list(), vec![ana()]);
}

#[test]
fn delete_twice_reports_not_found() {
    let mut service = new_service();
    service.add(Some(&ana())).unwrap();

    service.delete("A1").unwrap();
    let err = service.delete("A1").unwrap_err();
    assert_eq!(err, StudentServiceError::NotFound);
    assert!(service.get("A1").is_none());
    assert!(!service.repository().exists_by_id("A1"));
}

#[test]
fn delete_blank_id_is_rejected() {
    let mut service = new_service();
    assert_eq!(service.delete("  "), Err(StudentServiceError::IdRequired));
}

#[test]
fn add_with_zero_age_is_rejected() {
    let mut service = new_service();
    let err = service.add(Some(&Student::new("B2", "Bea", 0))).unwrap_err();
    assert_eq!(err.to_string(), "age must be greater than 0");
    assert!(service.list().is_empty());
}

#[test]
fn list_returns_independent_snapshot() {
    let mut service = new_service();
    service.add(Some(&ana())).unwrap();

    let mut snapshot = service.list();
    snapshot[0].names = "Mutated".to_string();
    snapshot.clear();
    assert_eq!(service.list(), vec![ana()]);

    let before = service.list();
    service.add(Some(&Student::new("B2", "Bea", 30))).unwrap();
    service.delete("A1").unwrap();
    assert_eq!(before, vec![ana()]);
}

#[test]
fn each_distinct_id_is_added_exactly_once() {
    let mut service = new_service();
    for (index, id) in ["A1", "B2", "C3"].iter().enumerate() {
        let student = Student::new(*id, format!("Student {index}"), 18 + index as i32);
        service.add(Some(&student)).unwrap();
        assert_eq!(
            service.add(Some(&student)),
            Err(StudentServiceError::IdAlreadyExists)
        );
    }
    assert_eq!(service.list().len(), 3);
}

#[test]
fn repository_edit_never_changes_id() {
    let mut repo = InMemoryStudentRepository::new();
    repo.add(ana()).unwrap();

    repo.edit(&Student::new("A1", "Renamed", 30)).unwrap();
    let stored = repo.get_by_id("A1").unwrap();
    assert_eq!(stored, Student::new("A1", "Renamed", 30));
    assert_eq!(repo.len(), 1);
}

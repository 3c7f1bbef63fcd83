//! Test utilities and module declarations for storage tests.


use crate::Storage;
use box_tracker_core::NewBox;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_box(number: i32, room: &str) -> NewBox {
    NewBox::new(number, room, format!("contents of box {number}"))
}

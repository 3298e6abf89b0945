#![forbid(unsafe_code)]

use lazy_static::lazy_static;
use poem_openapi::Object;

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// The entire student directory: one fixed record, materialized on first use
// and never mutated.
lazy_static! {
    pub static ref STUDENT: Student = Student::new(1, "Jean", 25, "3");
}

// ***************************************************************************
//                               Record Types
// ***************************************************************************
// ---------------------------------------------------------------------------
// Student:
// ---------------------------------------------------------------------------
/// A student directory record.  The year field is a string-encoded integer,
/// matching the upstream data source.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub year: String,
}

impl Student {
    pub fn new(id: i32, name: &str, age: i32, year: &str) -> Self {
        Self {id, name: name.to_string(), age, year: year.to_string()}
    }
}

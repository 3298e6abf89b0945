#![forbid(unsafe_code)]

pub mod books_get;
pub mod items_get;
pub mod students_get;
pub mod version;

pub(crate) mod access_sessions;
pub(crate) mod enrollments;
pub(crate) mod exam_definitions;
pub(crate) mod exam_windows;
pub(crate) mod programs;
pub(crate) mod students;

pub mod courses;
pub mod groups;
pub mod students;
pub mod teachers;

pub use courses::CourseService;
pub use groups::GroupService;
pub use students::StudentService;
pub use teachers::TeacherService;

pub mod academic_calendar;
pub mod semesters;

pub use self::academic_calendar::service::AcademicCalendarService;
pub use self::semesters::service::SemesterService;

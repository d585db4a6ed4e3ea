pub mod request;
pub mod schedule;

pub use request::PlanRequest;
pub use schedule::RenderedSchedule;

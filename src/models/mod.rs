pub mod candidate;
pub mod improvement_request;
pub mod position;
pub mod question;
pub mod recruiter;
pub mod vacancy;

pub mod candidate_dto;
pub mod directory_dto;
pub mod public_dto;
pub mod question_dto;
pub mod request_dto;
pub mod vacancy_dto;

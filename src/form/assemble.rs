use super::{Answers, ApplicantFields};
use crate::models::candidate::{NewCandidate, SubmittedAnswer};
use crate::models::question::Question;
use crate::models::vacancy::Vacancy;

/// Builds the record handed to the store.
///
/// Every question produces an entry, in the order given, with the prompt
/// copied in so the submission stays readable after the catalog changes.
/// Unanswered questions are recorded with an empty answer.
pub fn assemble_submission(
    fields: &ApplicantFields,
    vacancy: Option<&Vacancy>,
    questions: &[Question],
    answers: &Answers,
) -> NewCandidate {
    let answers = questions
        .iter()
        .map(|question| SubmittedAnswer {
            question_id: question.id,
            question_text: question.text.clone(),
            answer: answers.get(&question.id).cloned().unwrap_or_default(),
        })
        .collect();

    NewCandidate {
        full_name: fields.full_name.trim().to_string(),
        email: fields.email.trim().to_string(),
        phone: fields.phone.trim().to_string(),
        vacancy_id: fields.vacancy_id,
        vacancy_title: vacancy.map(|v| v.title.clone()).unwrap_or_default(),
        zona: fields.zona.trim().to_string(),
        message: fields.message.trim().to_string(),
        answers,
    }
}

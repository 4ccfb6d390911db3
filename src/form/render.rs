use serde::Serialize;
use uuid::Uuid;

use super::handler_for;
use super::validate::question_key;
use crate::models::question::{Question, QuestionType};

/// Input a client should draw for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    TextInput,
    TextArea { rows: u8 },
    NumberInput,
    DatePicker,
    Dropdown { choices: Vec<Choice> },
    RadioGroup { choices: Vec<Choice> },
    CheckboxGroup { choices: Vec<Choice> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedQuestion {
    pub question_id: Uuid,
    /// Field name; also the key validation errors are reported under.
    pub name: String,
    pub label: String,
    pub question_type: QuestionType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(flatten)]
    pub control: Control,
}

pub const NOT_CHOSEN_LABEL: &str = "Select an option";

/// Renders questions in the order given, numbering labels from 1.
pub fn render_questions(questions: &[Question]) -> Vec<RenderedQuestion> {
    questions
        .iter()
        .enumerate()
        .map(|(idx, question)| render_question(idx + 1, question))
        .collect()
}

pub fn render_question(position: usize, question: &Question) -> RenderedQuestion {
    let control = (handler_for(question.question_type).render)(question);
    RenderedQuestion {
        question_id: question.id,
        name: question_key(question.id),
        label: format!("{}. {}", position, question.text),
        question_type: question.question_type,
        required: question.required,
        placeholder: placeholder(&control),
        control,
    }
}

fn placeholder(control: &Control) -> Option<&'static str> {
    match control {
        Control::TextInput | Control::TextArea { .. } => Some("Type your answer..."),
        Control::NumberInput => Some("Enter a number"),
        _ => None,
    }
}

fn choices(question: &Question) -> Vec<Choice> {
    question
        .options
        .iter()
        .map(|opt| Choice {
            value: opt.clone(),
            label: opt.clone(),
        })
        .collect()
}

pub(crate) fn text_input(_: &Question) -> Control {
    Control::TextInput
}

pub(crate) fn text_area(_: &Question) -> Control {
    Control::TextArea { rows: 3 }
}

pub(crate) fn number_input(_: &Question) -> Control {
    Control::NumberInput
}

pub(crate) fn date_picker(_: &Question) -> Control {
    Control::DatePicker
}

pub(crate) fn dropdown(question: &Question) -> Control {
    let mut all = vec![Choice {
        value: String::new(),
        label: NOT_CHOSEN_LABEL.to_string(),
    }];
    all.extend(choices(question));
    Control::Dropdown { choices: all }
}

pub(crate) fn radio_group(question: &Question) -> Control {
    Control::RadioGroup {
        choices: choices(question),
    }
}

pub(crate) fn checkbox_group(question: &Question) -> Control {
    Control::CheckboxGroup {
        choices: choices(question),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(question_type: QuestionType, options: &[&str]) -> Question {
        Question {
            id: Uuid::new_v4(),
            vacancy_id: Uuid::new_v4(),
            text: "Preferred shift?".into(),
            question_type,
            required: true,
            options: options.iter().map(|o| o.to_string()).collect(),
            order: 0,
            created_at: None,
        }
    }

    #[test]
    fn dropdown_starts_with_an_empty_choice() {
        let rendered = render_question(1, &question(QuestionType::Select, &["Morning", "Night"]));
        match rendered.control {
            Control::Dropdown { choices } => {
                assert_eq!(choices.len(), 3);
                assert_eq!(choices[0].value, "");
                assert_eq!(choices[1].value, "Morning");
            }
            other => panic!("unexpected control {:?}", other),
        }
    }

    #[test]
    fn radio_renders_one_choice_per_option() {
        let rendered = render_question(2, &question(QuestionType::Radio, &["Yes", "No"]));
        assert_eq!(rendered.label, "2. Preferred shift?");
        assert_eq!(
            rendered.control,
            Control::RadioGroup {
                choices: vec![
                    Choice { value: "Yes".into(), label: "Yes".into() },
                    Choice { value: "No".into(), label: "No".into() },
                ]
            }
        );
    }

    #[test]
    fn each_type_maps_to_its_control() {
        let cases = [
            (QuestionType::Text, "text_input"),
            (QuestionType::Textarea, "text_area"),
            (QuestionType::Number, "number_input"),
            (QuestionType::Date, "date_picker"),
            (QuestionType::Select, "dropdown"),
            (QuestionType::Radio, "radio_group"),
            (QuestionType::Checkbox, "checkbox_group"),
        ];
        for (kind, control) in cases {
            let json = serde_json::to_value(render_question(1, &question(kind, &["A"]))).unwrap();
            assert_eq!(json["control"], control, "type {}", kind);
            assert_eq!(json["type"].as_str(), None);
            assert_eq!(json["questionType"], kind.as_str());
        }
    }

    #[test]
    fn field_name_matches_error_key() {
        let q = question(QuestionType::Text, &[]);
        let rendered = render_question(1, &q);
        assert_eq!(rendered.name, format!("question_{}", q.id));
    }
}

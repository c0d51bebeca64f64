//! Wire protocol for the `/api/ask` endpoint.
//!
//! Requests are plain serde structs. Replies are loosely shaped JSON, so
//! they are parsed by hand into closed enums: anything that is not a JSON
//! object is rejected, and missing fields fall back to empty values.

use chatbox_core::prelude::*;
use chatbox_core::{
    display_value, is_truthy, ClarifyingQuestion, ConsultationHistory, ConversationId, Diagnosis,
};
use serde::Serialize;
use serde_json::{Map, Value};

// ─────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────

/// Two-party turn: the patient's text plus the doctor question it answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultRequest {
    pub patient_message: String,
    /// Serialized as `null` when the doctor has not asked anything since the
    /// last patient turn
    pub doctor_message: Option<String>,
    pub conversation_id: Option<ConversationId>,
}

/// Demo turn: the user's text and the 1-based index of the chosen
/// question chip (0 when none is selected).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequest {
    pub user_message: String,
    pub selected_question: usize,
}

// ─────────────────────────────────────────────────────────────────
// Clarifications
// ─────────────────────────────────────────────────────────────────

/// One `question_to_clarify` entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClarificationItem {
    pub question: String,
    pub selective_answers: Vec<String>,
}

/// `question_to_clarify` as sent by the server, in server order.
///
/// Kept around after a reply so a later doctor selection can be matched
/// back to its canned answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClarificationMap {
    entries: Vec<(String, ClarificationItem)>,
}

impl ClarificationMap {
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            warn!("question_to_clarify is not an object: {value}");
            return Self::default();
        };

        let entries = object
            .iter()
            .map(|(key, item)| {
                let question = item
                    .get("question")
                    .and_then(display_value)
                    .unwrap_or_default();
                let selective_answers = item
                    .get("selective_answers")
                    .map(values_of)
                    .unwrap_or_default();
                (
                    key.clone(),
                    ClarificationItem {
                        question,
                        selective_answers,
                    },
                )
            })
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Questions ordered by their numeric key.
    ///
    /// Keys that are not integers cannot be numbered and are skipped.
    pub fn questions(&self) -> Vec<ClarifyingQuestion> {
        let mut questions: Vec<ClarifyingQuestion> = self
            .entries
            .iter()
            .filter_map(|(key, item)| match key.trim().parse::<u32>() {
                Ok(number) => Some(ClarifyingQuestion {
                    question: item.question.clone(),
                    number,
                    selective_answers: item.selective_answers.clone(),
                }),
                Err(_) => {
                    warn!("Skipping clarification with non-numeric key {key:?}");
                    None
                }
            })
            .collect();
        questions.sort_by_key(|q| q.number);
        questions
    }

    /// Look up an entry by exact question text
    pub fn find(&self, question: &str) -> Option<&ClarificationItem> {
        self.entries
            .iter()
            .map(|(_, item)| item)
            .find(|item| item.question == question)
    }
}

// ─────────────────────────────────────────────────────────────────
// Replies
// ─────────────────────────────────────────────────────────────────

/// Reply to a two-party turn. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultReply {
    pub conversation_id: Option<ConversationId>,
    pub history: Option<ConsultationHistory>,
    pub diagnosis: Option<Diagnosis>,
    /// `Some` whenever the server sent `question_to_clarify`, even if empty
    pub clarifications: Option<ClarificationMap>,
}

impl ConsultReply {
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = expect_object(value)?;

        // The backend has shipped both spellings of this key.
        let history = ["health_issue_summarization", "heath_issue_summarization"]
            .iter()
            .filter_map(|key| object.get(*key))
            .find_map(ConsultationHistory::from_value);

        Ok(Self {
            conversation_id: object
                .get("conversationId")
                .and_then(ConversationId::from_reply),
            history,
            diagnosis: object.get("diagnosis").and_then(Diagnosis::from_value),
            clarifications: object
                .get("question_to_clarify")
                .filter(|v| is_truthy(v))
                .map(ClarificationMap::from_value),
        })
    }
}

/// Reply to a demo turn.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoReply {
    /// The bot wants more detail: show question chips
    Intermediate {
        questions: Vec<String>,
        brief_response: Option<String>,
        diagnoses: Vec<String>,
        medical_history: Vec<String>,
    },
    /// The bot has settled on a diagnosis
    Terminal {
        diagnosis: Option<String>,
        medical_history: Vec<String>,
    },
}

impl DemoReply {
    /// Classify a reply by the presence of `questions`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = expect_object(value)?;

        let medical_history = object
            .get("medical_history")
            .and_then(|h| h.get("medical_history"))
            .map(values_of)
            .unwrap_or_default();
        let diagnosis = object.get("diagnosis");

        match object.get("questions").filter(|q| is_truthy(q)) {
            Some(questions) => Ok(DemoReply::Intermediate {
                questions: values_of(questions),
                brief_response: diagnosis
                    .and_then(|d| d.get("Brief_Response"))
                    .and_then(display_value),
                diagnoses: diagnosis
                    .and_then(|d| d.get("Diagnoses"))
                    .map(values_of)
                    .unwrap_or_default(),
                medical_history,
            }),
            None => Ok(DemoReply::Terminal {
                diagnosis: diagnosis.and_then(display_value),
                medical_history,
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────

fn expect_object(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::protocol(format!("expected a JSON object, got {value}")))
}

/// Flatten an array or object into display strings, in order.
///
/// Null yields nothing; a lone scalar yields itself.
pub fn values_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(display_value).collect(),
        Value::Object(map) => map.values().filter_map(display_value).collect(),
        other => display_value(other).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_consult_request_shape() {
        let req = ConsultRequest {
            patient_message: "Background: none\n\nMessage: cough".to_string(),
            doctor_message: None,
            conversation_id: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "patientMessage": "Background: none\n\nMessage: cough",
                "doctorMessage": null,
                "conversationId": null
            })
        );
    }

    #[test]
    fn test_demo_request_shape() {
        let req = DemoRequest {
            user_message: "I feel dizzy".to_string(),
            selected_question: 2,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"userMessage": "I feel dizzy", "selectedQuestion": 2})
        );
    }

    #[test]
    fn test_questions_ordered_by_numeric_key() {
        let map = ClarificationMap::from_value(&json!({
            "10": {"question": "Q10", "selective_answers": ["a"]},
            "2": {"question": "Q2", "selective_answers": ["b", "c"]},
            "1": {"question": "Q1", "selective_answers": []}
        }));
        let questions = map.questions();
        let numbers: Vec<u32> = questions.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2, 10]);
        assert_eq!(questions[1].question, "Q2");
        assert_eq!(questions[1].selective_answers, vec!["b", "c"]);
    }

    #[test]
    fn test_questions_skip_non_numeric_keys() {
        let map = ClarificationMap::from_value(&json!({
            "x": {"question": "Qx", "selective_answers": []},
            "3": {"question": "Q3", "selective_answers": []}
        }));
        assert_eq!(map.len(), 2);
        assert_eq!(map.questions().len(), 1);
        assert!(map.find("Qx").is_some());
    }

    #[test]
    fn test_find_requires_exact_text() {
        let map = ClarificationMap::from_value(&json!({
            "1": {"question": "Any fever?", "selective_answers": ["Yes", "No"]}
        }));
        assert_eq!(map.find("Any fever?").unwrap().selective_answers, vec!["Yes", "No"]);
        assert!(map.find("any fever?").is_none());
        assert!(map.find("Any fever").is_none());
    }

    #[test]
    fn test_consult_reply_full() {
        let reply = ConsultReply::from_value(&json!({
            "conversationId": "c-42",
            "health_issue_summarization": "Persistent cough for two weeks",
            "diagnosis": {"a": {"name": "Bronchitis", "link": "", "justification": "Cough", "rating": 7}},
            "question_to_clarify": {"1": {"question": "Any fever?", "selective_answers": ["Yes", "No"]}}
        }))
        .unwrap();

        assert_eq!(reply.conversation_id, Some(ConversationId(json!("c-42"))));
        assert_eq!(
            reply.history,
            Some(ConsultationHistory::Text("Persistent cough for two weeks".to_string()))
        );
        assert!(matches!(reply.diagnosis, Some(Diagnosis::Ranked(_))));
        assert_eq!(reply.clarifications.unwrap().questions().len(), 1);
    }

    #[test]
    fn test_consult_reply_accepts_misspelled_summary_key() {
        let reply = ConsultReply::from_value(&json!({
            "heath_issue_summarization": "Migraine history",
            "question_to_clarify": {}
        }))
        .unwrap();
        assert_eq!(
            reply.history,
            Some(ConsultationHistory::Text("Migraine history".to_string()))
        );
    }

    #[test]
    fn test_empty_clarifications_still_present() {
        let reply = ConsultReply::from_value(&json!({"question_to_clarify": {}})).unwrap();
        assert_eq!(reply.clarifications, Some(ClarificationMap::default()));

        let reply = ConsultReply::from_value(&json!({})).unwrap();
        assert!(reply.clarifications.is_none());
        assert!(reply.diagnosis.is_none());
    }

    #[test]
    fn test_final_consult_reply_has_text_diagnosis() {
        let reply = ConsultReply::from_value(&json!({
            "conversationId": "c-42",
            "diagnosis": "Most likely viral bronchitis",
            "question_to_clarify": {}
        }))
        .unwrap();
        assert_eq!(
            reply.diagnosis,
            Some(Diagnosis::Text("Most likely viral bronchitis".to_string()))
        );
    }

    #[test]
    fn test_non_object_reply_is_rejected() {
        let err = ConsultReply::from_value(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
        assert!(DemoReply::from_value(&json!("oops")).is_err());
    }

    #[test]
    fn test_demo_intermediate_reply() {
        let reply = DemoReply::from_value(&json!({
            "questions": {"1": "How long?", "2": "Any pain?"},
            "diagnosis": {"Brief_Response": "Tell me more.", "Diagnoses": {"a": "Flu", "b": "Cold"}},
            "medical_history": {"medical_history": ["Asthma"]}
        }))
        .unwrap();
        assert_eq!(
            reply,
            DemoReply::Intermediate {
                questions: vec!["How long?".to_string(), "Any pain?".to_string()],
                brief_response: Some("Tell me more.".to_string()),
                diagnoses: vec!["Flu".to_string(), "Cold".to_string()],
                medical_history: vec!["Asthma".to_string()],
            }
        );
    }

    #[test]
    fn test_demo_questions_without_diagnoses() {
        let reply = DemoReply::from_value(&json!({
            "questions": ["How long?"],
            "diagnosis": {"Brief_Response": "Okay."}
        }))
        .unwrap();
        let DemoReply::Intermediate { diagnoses, questions, .. } = reply else {
            panic!("expected intermediate reply");
        };
        assert!(diagnoses.is_empty());
        assert_eq!(questions, vec!["How long?"]);
    }

    #[test]
    fn test_demo_terminal_reply() {
        let reply = DemoReply::from_value(&json!({
            "diagnosis": "Seasonal allergies",
            "medical_history": {"medical_history": {"a": "Hay fever"}}
        }))
        .unwrap();
        assert_eq!(
            reply,
            DemoReply::Terminal {
                diagnosis: Some("Seasonal allergies".to_string()),
                medical_history: vec!["Hay fever".to_string()],
            }
        );
    }

    #[test]
    fn test_values_of() {
        assert_eq!(values_of(&json!(["a", 1])), vec!["a", "1"]);
        assert_eq!(values_of(&json!({"x": "b"})), vec!["b"]);
        assert!(values_of(&Value::Null).is_empty());
        assert_eq!(values_of(&json!("solo")), vec!["solo"]);
    }
}

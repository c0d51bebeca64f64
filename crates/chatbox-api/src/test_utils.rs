//! Test utilities for the backend protocol
//!
//! Canned reply payloads shaped like the real server's, and a scripted
//! backend that replays them in order.

use std::collections::VecDeque;
use std::sync::Mutex;

use chatbox_core::{Error, Result};
use serde_json::{json, Value};

use crate::client::AskBackend;
use crate::protocol::{ConsultReply, ConsultRequest, DemoReply, DemoRequest};

/// Mid-consultation reply with a ranked diagnosis and two clarifying questions.
pub fn consult_reply_json() -> Value {
    json!({
        "conversationId": "conv-001",
        "health_issue_summarization": "Patient reports a throbbing headache for three days.",
        "diagnosis": {
            "d1": {
                "name": "Migraine",
                "link": "https://www.healthdirect.gov.au/migraine",
                "justification": "Throbbing unilateral pain with light sensitivity",
                "rating": 8
            },
            "d2": {
                "name": "Tension headache",
                "link": "https://www.healthdirect.gov.au/tension-headache",
                "justification": "Stress related, band-like pressure",
                "rating": 5
            },
            "d3": {
                "name": "Sinusitis",
                "link": "https://www.healthdirect.gov.au/sinusitis",
                "justification": "Facial pressure without congestion is less typical",
                "rating": 2
            },
            "d4": {
                "name": "Cluster headache",
                "link": "https://www.healthdirect.gov.au/cluster-headache",
                "justification": "Unlikely given the duration",
                "rating": 1
            }
        },
        "question_to_clarify": {
            "2": {
                "question": "Is the pain worse with light?",
                "selective_answers": ["Yes", "No", "Not sure"]
            },
            "1": {
                "question": "Do you have a fever?",
                "selective_answers": ["Yes", "No"]
            }
        }
    })
}

/// Closing reply: text diagnosis and no further questions.
pub fn consult_final_reply_json() -> Value {
    json!({
        "conversationId": "conv-001",
        "heath_issue_summarization": "Three day migraine without aura.",
        "diagnosis": "Migraine without aura. Recommend GP review.",
        "question_to_clarify": {}
    })
}

/// Demo reply that asks follow-up questions.
pub fn demo_intermediate_json() -> Value {
    json!({
        "questions": {
            "1": "How long have you felt this way?",
            "2": "Is there any pain?",
            "3": "Have you travelled recently?"
        },
        "diagnosis": {
            "Brief_Response": "Thanks, a few more questions.",
            "Diagnoses": {"a": "Influenza", "b": "Common cold"}
        },
        "medical_history": {"medical_history": {"a": "Asthma", "b": "Penicillin allergy"}}
    })
}

/// Demo reply that settles on a diagnosis.
pub fn demo_terminal_json() -> Value {
    json!({
        "diagnosis": "Influenza",
        "medical_history": {"medical_history": ["Asthma"]}
    })
}

/// Scripted outcome for one backend call
#[derive(Debug)]
pub enum Scripted {
    Reply(Value),
    Fail(Error),
}

/// Backend that replays scripted replies and records every request.
///
/// Replies are parsed with the real protocol parsers, so a scripted
/// malformed body fails the same way a live one would.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    consult_script: Mutex<VecDeque<Scripted>>,
    demo_script: Mutex<VecDeque<Scripted>>,
    consult_requests: Mutex<Vec<ConsultRequest>>,
    demo_requests: Mutex<Vec<DemoRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_consult(self, outcome: Scripted) -> Self {
        lock(&self.consult_script).push_back(outcome);
        self
    }

    pub fn with_demo(self, outcome: Scripted) -> Self {
        lock(&self.demo_script).push_back(outcome);
        self
    }

    pub fn consult_requests(&self) -> Vec<ConsultRequest> {
        lock(&self.consult_requests).clone()
    }

    pub fn demo_requests(&self) -> Vec<DemoRequest> {
        lock(&self.demo_requests).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn next_value(script: &Mutex<VecDeque<Scripted>>) -> Result<Value> {
    match lock(script).pop_front() {
        Some(Scripted::Reply(value)) => Ok(value),
        Some(Scripted::Fail(err)) => Err(err),
        None => Err(Error::http("no scripted reply left")),
    }
}

impl AskBackend for ScriptedBackend {
    async fn consult(&self, request: ConsultRequest) -> Result<ConsultReply> {
        lock(&self.consult_requests).push(request);
        let value = next_value(&self.consult_script)?;
        ConsultReply::from_value(&value)
    }

    async fn demo(&self, request: DemoRequest) -> Result<DemoReply> {
        lock(&self.demo_requests).push(request);
        let value = next_value(&self.demo_script)?;
        DemoReply::from_value(&value)
    }
}

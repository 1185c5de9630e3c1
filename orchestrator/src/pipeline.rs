//! Decompose-then-solve control flow
//!
//! One `ask` call makes a decomposition request, then solves the
//! resulting sub-questions strictly in order. The solve loop cannot be
//! parallelized: each solving prompt embeds the context accumulated from
//! every prior answer. Any failure at any stage aborts the whole request
//! and discards the partial steps.

use std::sync::Arc;

use stepwise_sdk::{AnswerRecord, AskResponse, Reply, StepwiseError};

use crate::responder::{Responder, Result};

/// Build the prompt asking the responder to decompose a question
pub fn decomposition_prompt(question: &str) -> String {
    format!("Decompose this question into simple steps: '{}'", question)
}

/// Build the prompt asking the responder to solve one sub-question
///
/// The context is the concatenation of all previously produced answers,
/// each preceded by a single space. It is empty for the first step.
pub fn solving_prompt(context: &str, sub_question: &str) -> String {
    format!(
        "Using this context: '{}'. Answer this question: '{}'",
        context, sub_question
    )
}

/// The decompose-then-solve pipeline
///
/// Owns nothing but the responder handle; all per-request state (the
/// context accumulator, the collected steps) lives on the stack of one
/// `ask` call, so concurrent requests are independent.
pub struct Pipeline {
    responder: Arc<dyn Responder>,
}

impl Pipeline {
    /// Create a new pipeline over a responder
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self { responder }
    }

    /// Decompose a question and solve its sub-questions in order
    pub async fn ask(&self, question: &str) -> Result<AskResponse> {
        tracing::info!("Received complex question: {}", question);

        let prompt = decomposition_prompt(question);
        tracing::debug!("Sending decomposition request: {}", prompt);

        let sub_questions = match self.responder.generate(&prompt).await? {
            Reply::Steps(steps) => steps,
            Reply::Text(_) => {
                return Err(StepwiseError::InvalidUpstreamResponse(
                    "Decomposition did not return a list of sub-questions".to_string(),
                ))
            }
        };

        tracing::info!("Question decomposed into {} steps", sub_questions.len());

        let mut steps = Vec::with_capacity(sub_questions.len());
        let mut context = String::new();

        for sub_question in sub_questions {
            let prompt = solving_prompt(&context, &sub_question);
            tracing::debug!("Sending solving request for: {}", sub_question);

            let answer = match self.responder.generate(&prompt).await? {
                Reply::Text(answer) => answer,
                Reply::Steps(_) => {
                    return Err(StepwiseError::InvalidUpstreamResponse(format!(
                        "Solving '{}' did not return a single answer",
                        sub_question
                    )))
                }
            };

            tracing::info!("Answered: {}", answer);

            context.push(' ');
            context.push_str(&answer);
            steps.push(AnswerRecord {
                question: sub_question,
                answer,
            });
        }

        Ok(AskResponse {
            original_question: question.to_string(),
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A responder that plays back a fixed script of results and records
    /// every prompt it is sent.
    struct ScriptedResponder {
        script: Mutex<VecDeque<Result<Reply>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedResponder {
        fn new(script: impl IntoIterator<Item = Result<Reply>>) -> Self {
            Self {
                script: Mutex::new(script.into_iter().collect()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Responder for ScriptedResponder {
        async fn generate(&self, prompt: &str) -> Result<Reply> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .expect("script exhausted")
        }
    }

    fn pipeline_over(responder: &Arc<ScriptedResponder>) -> Pipeline {
        Pipeline::new(Arc::clone(responder) as Arc<dyn Responder>)
    }

    #[test]
    fn test_prompt_formats() {
        assert_eq!(
            decomposition_prompt("Why?"),
            "Decompose this question into simple steps: 'Why?'"
        );
        assert_eq!(
            solving_prompt("", "1. First."),
            "Using this context: ''. Answer this question: '1. First.'"
        );
        assert_eq!(
            solving_prompt(" earlier answer", "2. Second."),
            "Using this context: ' earlier answer'. Answer this question: '2. Second.'"
        );
    }

    #[tokio::test]
    async fn test_ask_collects_answers_in_order() {
        let responder = Arc::new(ScriptedResponder::new([
            Ok(Reply::steps(["1. A?", "2. B?", "3. C?"])),
            Ok(Reply::text("answer a")),
            Ok(Reply::text("answer b")),
            Ok(Reply::text("answer c")),
        ]));

        let result = pipeline_over(&responder).ask("A complex question").await.unwrap();

        assert_eq!(result.original_question, "A complex question");
        assert_eq!(
            result.steps,
            vec![
                AnswerRecord {
                    question: "1. A?".to_string(),
                    answer: "answer a".to_string()
                },
                AnswerRecord {
                    question: "2. B?".to_string(),
                    answer: "answer b".to_string()
                },
                AnswerRecord {
                    question: "3. C?".to_string(),
                    answer: "answer c".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_context_accumulates_prior_answers_only() {
        let responder = Arc::new(ScriptedResponder::new([
            Ok(Reply::steps(["1. A?", "2. B?", "3. C?"])),
            Ok(Reply::text("answer a")),
            Ok(Reply::text("answer b")),
            Ok(Reply::text("answer c")),
        ]));

        pipeline_over(&responder).ask("question").await.unwrap();

        let prompts = responder.prompts();
        assert_eq!(prompts.len(), 4);

        // Step 1 sees an empty context and no answers
        assert!(prompts[1].contains("Using this context: ''"));
        assert!(!prompts[1].contains("answer a"));

        // Step 2 sees answer a but not b or c
        assert!(prompts[2].contains("answer a"));
        assert!(!prompts[2].contains("answer b"));
        assert!(!prompts[2].contains("answer c"));

        // Step 3 sees a then b, in order, and not c
        assert!(prompts[3].contains("Using this context: ' answer a answer b'"));
        assert!(!prompts[3].contains("answer c"));
    }

    #[tokio::test]
    async fn test_decomposition_returning_text_is_rejected() {
        // A single string must not be iterated as characters or words
        let responder = Arc::new(ScriptedResponder::new([Ok(Reply::text(
            "1. Do everything at once.",
        ))]));

        let err = pipeline_over(&responder).ask("question").await.unwrap_err();
        assert!(matches!(err, StepwiseError::InvalidUpstreamResponse(_)));

        // No solve call was made
        assert_eq!(responder.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_solve_returning_list_is_rejected() {
        let responder = Arc::new(ScriptedResponder::new([
            Ok(Reply::steps(["1. A?"])),
            Ok(Reply::steps(["nested", "list"])),
        ]));

        let err = pipeline_over(&responder).ask("question").await.unwrap_err();
        assert!(matches!(err, StepwiseError::InvalidUpstreamResponse(_)));
    }

    #[tokio::test]
    async fn test_mid_sequence_failure_discards_partial_steps() {
        let responder = Arc::new(ScriptedResponder::new([
            Ok(Reply::steps(["1. A?", "2. B?"])),
            Ok(Reply::text("answer a")),
            Err(StepwiseError::ServiceUnavailable("gone away".to_string())),
        ]));

        let err = pipeline_over(&responder).ask("question").await.unwrap_err();
        assert!(matches!(err, StepwiseError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_empty_decomposition_yields_no_steps() {
        let responder = Arc::new(ScriptedResponder::new([Ok(Reply::steps(
            Vec::<String>::new(),
        ))]));

        let result = pipeline_over(&responder).ask("question").await.unwrap();
        assert!(result.steps.is_empty());
        assert_eq!(result.original_question, "question");
    }
}

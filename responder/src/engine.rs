//! Canned-reply engine
//!
//! Pure prompt-to-reply logic, no I/O. Matching is case-insensitive,
//! substring-based, first-match-wins in the order the checks appear.
//! There are no error paths: unrecognized prompts get the fallback
//! sentence.
//!
//! The check order is load-bearing. Solving prompts embed every prior
//! answer as context, so "capital of florida" (from the first answer)
//! appears in every later prompt of the example flow. The more specific
//! keys are checked first, and the time answer keys on the "time" +
//! "tallahassee" pair — "tallahassee" only ever arrives via the context.

use stepwise_sdk::Reply;

/// The fixed decomposition returned for the example question
pub const DECOMPOSITION_STEPS: [&str; 3] = [
    "1. Find the capital of Florida.",
    "2. Find the current time in the capital.",
    "3. Determine if it is daytime or nighttime.",
];

/// Answer for prompts asking about the capital of Florida
pub const CAPITAL_ANSWER: &str = "The capital of Florida is Tallahassee.";

/// Answer for prompts asking about the time in Tallahassee
pub const TIME_ANSWER: &str = "The current time is 6:49 PM EDT.";

/// Answer for prompts asking whether it is daytime or nighttime
pub const DAYTIME_ANSWER: &str = "It is currently nighttime.";

/// Fallback for prompts matching none of the known patterns
pub const FALLBACK_ANSWER: &str = "I am a mock LLM and can only answer specific questions.";

/// Produce the canned reply for a prompt.
///
/// Decomposition requests ("decompose" + "florida") return the fixed
/// 3-step list; the known sub-question keys return their fixed
/// sentences; anything else returns [`FALLBACK_ANSWER`].
pub fn reply_to(prompt: &str) -> Reply {
    let prompt = prompt.to_lowercase();

    if prompt.contains("decompose") && prompt.contains("florida") {
        tracing::info!("Decomposing into {} steps", DECOMPOSITION_STEPS.len());
        return Reply::steps(DECOMPOSITION_STEPS);
    }

    let answer = if prompt.contains("daytime or nighttime") {
        DAYTIME_ANSWER
    } else if prompt.contains("time") && prompt.contains("tallahassee") {
        TIME_ANSWER
    } else if prompt.contains("capital of florida") {
        CAPITAL_ANSWER
    } else {
        FALLBACK_ANSWER
    };

    tracing::info!("Solving. Response: {}", answer);
    Reply::text(answer)
}

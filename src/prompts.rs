use crate::config::Config;
use crate::types::{CompletionCall, Sampling};

pub const OUTLINE_INSTRUCTION: &str = include_str!("prompts/outline.txt");
pub const PROOFREAD_INSTRUCTION: &str = include_str!("prompts/proofread.txt");

pub const NO_GOAL_PLACEHOLDER: &str = "None provided.";

/// The instruction goes in the system message; goal and draft follow as two
/// labelled user parts. An empty goal falls back to the placeholder.
pub fn outline_call(config: &Config, essay_text: &str, outline_goal: Option<&str>) -> CompletionCall {
    let goal = outline_goal
        .filter(|goal| !goal.is_empty())
        .unwrap_or(NO_GOAL_PLACEHOLDER);

    CompletionCall {
        model: config.outline_model.clone(),
        system: Some(OUTLINE_INSTRUCTION.to_string()),
        user_parts: vec![
            format!("Outline goal:\n{goal}"),
            format!("Essay draft:\n{essay_text}"),
        ],
        sampling: Sampling {
            temperature: Some(config.outline_temperature),
            reasoning_effort: None,
        },
    }
}

pub fn proofread_call(config: &Config, text: &str) -> CompletionCall {
    CompletionCall {
        model: config.proofread_model.clone(),
        system: None,
        user_parts: vec![format!("{PROOFREAD_INSTRUCTION}{text}")],
        sampling: Sampling {
            temperature: None,
            reasoning_effort: Some(config.proofread_reasoning_effort.clone()),
        },
    }
}

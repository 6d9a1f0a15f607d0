use crate::data::Sample;
use crate::select::{extract_path, extract_question, select_examples};
use anyhow::Result;
use serde::Serialize;
use serde_json::Number;

pub const FILE_NAME: &str = "dpo_comparison_examples.json";

const TITLE: &str = "DPO Training: Learning from Mistakes";
const SUBTITLE: &str = "Teaching the model to prefer correct predictions over incorrect ones";

// Top-level object written to the comparison file
#[derive(Debug, Serialize)]
pub struct ComparisonDoc {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub examples: Vec<ComparisonExample>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonExample {
    pub example_number: usize, // 1-based
    pub question: String,
    pub scenario_path: Vec<String>,
    pub cumulative_probability: Number,
    pub model_said: ModelSaid,
    pub actual_outcome: ActualOutcome,
    pub dpo_action: String,
}

#[derive(Debug, Serialize)]
pub struct ModelSaid {
    pub prediction: String,
    pub label: &'static str,
    pub reasoning: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ActualOutcome {
    pub answer: String,
    pub label: &'static str,
    pub reasoning: &'static str,
}

pub fn build(samples: &[Sample]) -> ComparisonDoc {
    let examples = select_examples(samples)
        .into_iter()
        .enumerate()
        .map(|(i, s)| ComparisonExample {
            example_number: i + 1,
            question: extract_question(&s.prompt),
            scenario_path: extract_path(&s.prompt),
            cumulative_probability: s.metadata.cumulative_probability.clone(),
            model_said: ModelSaid {
                prediction: s.metadata.predicted_outcome.clone(),
                label: "REJECTED ❌",
                reasoning: "Model incorrectly predicted this outcome",
            },
            actual_outcome: ActualOutcome {
                answer: s.metadata.actual_outcome.clone(),
                label: "CHOSEN ✓",
                reasoning: "Verified historical outcome",
            },
            dpo_action: format!(
                "Decrease P('{}') and Increase P('{}')",
                s.rejected, s.chosen
            ),
        })
        .collect();

    ComparisonDoc {
        title: TITLE,
        subtitle: SUBTITLE,
        examples,
    }
}

pub fn render(doc: &ComparisonDoc) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

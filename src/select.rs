use crate::data::Sample;
use log::{info, warn};

pub const MAX_EXAMPLES: usize = 3;
pub const UNKNOWN_QUESTION: &str = "Unknown question";

const QUESTION_PREFIX: &str = "Question:";
const DEPTH_PREFIX: &str = "[Depth";

// (wrong, right), input order kept on both sides
pub fn partition(samples: &[Sample]) -> (Vec<&Sample>, Vec<&Sample>) {
    samples.iter().partition(|s| s.is_mispredicted())
}

pub fn select_examples(samples: &[Sample]) -> Vec<&Sample> {
    let (wrong, right) = partition(samples);
    info!(
        "{} mispredicted / {} correct samples",
        wrong.len(),
        right.len()
    );
    if wrong.len() < MAX_EXAMPLES {
        warn!(
            "Only {} mispredicted samples available, wanted {MAX_EXAMPLES}",
            wrong.len()
        );
    }
    wrong.into_iter().take(MAX_EXAMPLES).collect()
}

pub fn extract_question(prompt: &str) -> String {
    prompt
        .split('\n')
        .find_map(|line| line.strip_prefix(QUESTION_PREFIX))
        .map(|q| q.trim().to_owned())
        .unwrap_or_else(|| {
            warn!("Prompt has no question line");
            UNKNOWN_QUESTION.to_owned()
        })
}

pub fn extract_path(prompt: &str) -> Vec<String> {
    prompt
        .split('\n')
        .filter(|line| line.starts_with(DEPTH_PREFIX))
        .map(|line| line.trim().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleMetadata;
    use serde_json::Number;

    fn sample(tag: &str, predicted: &str, actual: &str) -> Sample {
        Sample {
            prompt: format!("Question: {tag}?"),
            chosen: actual.into(),
            rejected: predicted.into(),
            metadata: SampleMetadata {
                predicted_outcome: predicted.into(),
                actual_outcome: actual.into(),
                cumulative_probability: Number::from_f64(0.5).unwrap(),
            },
        }
    }

    #[test]
    fn question_line_is_stripped() {
        let q = extract_question("Question: Will X happen?\nOther line");
        assert_eq!(q, "Will X happen?");
    }

    #[test]
    fn first_question_line_wins() {
        let q = extract_question("Intro\nQuestion:  A? \nQuestion: B?");
        assert_eq!(q, "A?");
    }

    #[test]
    fn only_leading_prefix_is_removed() {
        assert_eq!(extract_question("Question: Is Question: X?"), "Is Question: X?");
    }

    #[test]
    fn missing_question_falls_back() {
        assert_eq!(extract_question("no question here\n  Question: indented"), UNKNOWN_QUESTION);
        assert_eq!(extract_question(""), UNKNOWN_QUESTION);
    }

    #[test]
    fn depth_lines_in_order() {
        let prompt = "Question: Q?\n[Depth 1] A (p=0.5)  \nnoise\n[Depth 2] B (p=0.5)\n";
        assert_eq!(
            extract_path(prompt),
            vec!["[Depth 1] A (p=0.5)", "[Depth 2] B (p=0.5)"]
        );
        assert!(extract_path("Question: Q?").is_empty());
    }

    #[test]
    fn selects_first_three_mismatches_in_order() {
        let samples = vec![
            sample("a", "YES", "YES"),
            sample("b", "NO", "YES"),
            sample("c", "YES", "NO"),
            sample("d", "NO", "NO"),
            sample("e", "YES", "NO"),
            sample("f", "NO", "YES"),
        ];
        let picked: Vec<_> = select_examples(&samples)
            .iter()
            .map(|s| extract_question(&s.prompt))
            .collect();
        assert_eq!(picked, vec!["b?", "c?", "e?"]);

        let (wrong, right) = partition(&samples);
        assert_eq!(wrong.len(), 4);
        assert_eq!(right.len(), 2);
    }

    #[test]
    fn fewer_than_three_is_fine() {
        let samples = vec![sample("a", "YES", "YES"), sample("b", "NO", "YES")];
        assert_eq!(select_examples(&samples).len(), 1);
        assert!(select_examples(&[]).is_empty());
    }
}

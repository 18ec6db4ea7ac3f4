use serde::Deserialize;

/// The three user-selectable pipeline tasks. One parameterized pipeline runs
/// all of them; the task only changes the prompt template and the export
/// filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisTask {
    Summarize,
    Interpret,
    SynthesizeReport,
}

impl AnalysisTask {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Summarize => "summary",
            Self::Interpret => "interpretation",
            Self::SynthesizeReport => "synthesized_review",
        }
    }
}

/// Requested output length/depth for generated prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Concise,
    Expanded,
    VeryDetailed,
}

/// User-selected knobs for one completion call. Built fresh per user action.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptOptions {
    pub detail_level: DetailLevel,
    pub max_output_tokens: usize,
    pub temperature: f32,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            detail_level: DetailLevel::Concise,
            max_output_tokens: 700,
            temperature: 0.2,
        }
    }
}

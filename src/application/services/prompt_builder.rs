use crate::domain::{AnalysisTask, DetailLevel};

const SUMMARIZE_SYSTEM: &str =
    "You summarize scientific papers in a structured, precise style.";

const INTERPRET_SYSTEM: &str = "You are a precise, safety-aware bioinformatics expert. \
     You never provide medical advice; you only suggest research-oriented next steps.";

const REPORT_SYSTEM: &str = "You write rigorous, well-structured scientific literature \
     reviews that compare and synthesize findings across multiple papers.";

/// Builds the text payload sent to the completion service: a fixed
/// instruction block per task followed by the verbatim extracted text or the
/// serialized table preview. Pure string formatting; identical inputs yield
/// byte-identical prompts.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn system_instruction(task: AnalysisTask) -> &'static str {
        match task {
            AnalysisTask::Summarize => SUMMARIZE_SYSTEM,
            AnalysisTask::Interpret => INTERPRET_SYSTEM,
            AnalysisTask::SynthesizeReport => REPORT_SYSTEM,
        }
    }

    pub fn summarize(text: &str, detail: DetailLevel) -> String {
        let depth = match detail {
            DetailLevel::Concise => "Keep it concise and structured.",
            DetailLevel::Expanded => {
                "Expand each section with the key supporting details and figures."
            }
            DetailLevel::VeryDetailed => {
                "Be very detailed: cover each section thoroughly, including methodology \
                 specifics, quantitative results, and limitations."
            }
        };
        format!(
            "Summarize the following research text in sections: Objectives, Methods, \
             Results, Conclusions. {depth}\n\n{text}"
        )
    }

    pub fn interpret(preview_csv: &str) -> String {
        format!(
            "You are a genomic scientist. Based on the following tabular sample (CSV) \
             from a genomic dataset, provide:\n\
             - What the dataset likely represents\n\
             - Key features/columns of interest\n\
             - Notable variants/genes if any are visible\n\
             - Potential biological/clinical significance (high-level, not medical advice)\n\
             - Recommended next analysis steps (e.g., variant annotation, filtering, \
             visualization, QC)\n\n\
             Table sample (first rows):\n{preview_csv}\n\n\
             If relevant, organize the answer with bullet points and short paragraphs.\n"
        )
    }

    /// Concatenates the given extracted texts, in upload order, under a
    /// single long-form review instruction. The caller bounds the batch
    /// before extraction (see
    /// [`crate::application::services::MAX_REPORT_DOCUMENTS`]).
    pub fn synthesize_report(texts: &[String]) -> String {
        let corpus = texts
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n");
        format!(
            "You are given the extracted text of several research papers, separated by \
             blank lines. Write one coherent long-form review with the sections: \
             Abstract, Introduction, Methods, Results, Discussion, Conclusion, \
             References. Explicitly compare and contrast findings across the source \
             documents.\n\n{corpus}"
        )
    }
}

mod completion;
mod content;
mod credential;
mod document;
mod task;

pub use completion::CompletionOutcome;
pub use content::{ExtractedContent, Table};
pub use credential::ApiCredential;
pub use document::{DocumentFormat, UploadedDocument};
pub use task::{AnalysisTask, DetailLevel, PromptOptions};

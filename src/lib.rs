//! Document ingestion and prompt synthesis pipeline.
//!
//! Uploaded research papers (PDF/TXT/DOCX) and genomic datasets (VCF/CSV/XLSX)
//! are extracted into plain text or tables, rendered into task-specific
//! prompts, sent to an external completion service, and optionally exported
//! as a downloadable report document.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

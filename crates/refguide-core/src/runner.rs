//! Guide Runner: writes topics in catalog order and records a proof per section
use crate::context::EmitContext;
use crate::data_model::{Section, SectionProof};
use crate::error::GuideError;
use crate::topic::Topic;
use std::io::Write;
use std::time::Instant;

/// Text layout seam between the runner and a concrete renderer
pub trait SectionFormatter {
    fn banner(&self, ctx: &EmitContext) -> Result<String, GuideError>;

    fn section(&self, section: &Section, ctx: &EmitContext) -> Result<String, GuideError>;

    fn footer(&self, ctx: &EmitContext) -> Result<String, GuideError>;
}

pub struct GuideRunner {
    topics: Vec<Box<dyn Topic>>,
    guide_id: String,
}

impl GuideRunner {
    pub fn new(topics: Vec<Box<dyn Topic>>) -> Self {
        let mut prefixes: Vec<&str> = topics
            .iter()
            .map(|t| t.id().split('.').next().unwrap_or("?"))
            .collect();
        prefixes.dedup();
        let guide_id = prefixes.join("→");

        Self { topics, guide_id }
    }

    /// Writes banner, every section and footer to `out`, in order.
    ///
    /// Any write failure aborts the run with `GuideError::OutputError`;
    /// nothing is retried.
    pub fn run<W: Write + ?Sized>(
        &self,
        ctx: &EmitContext,
        formatter: &dyn SectionFormatter,
        out: &mut W,
    ) -> Result<Vec<SectionProof>, GuideError> {
        tracing::info!(guide = %self.guide_id, topics = self.len(), "emitting guide");

        out.write_all(formatter.banner(ctx)?.as_bytes())?;

        let mut proofs = Vec::with_capacity(self.len());
        for topic in &self.topics {
            let start = Instant::now();

            let section = topic.build(ctx).map_err(|e| GuideError::TopicError {
                id: topic.id().to_string(),
                message: e.to_string(),
            })?;
            let text = formatter.section(&section, ctx)?;
            out.write_all(text.as_bytes())?;

            let proof = SectionProof {
                id: topic.id().to_string(),
                digest: self.hash_text(&text),
                deterministic: topic.deterministic(),
                rows: section.row_count(),
                latency_us: start.elapsed().as_micros() as u64,
            };
            tracing::debug!(id = %proof.id, rows = proof.rows, digest = %proof.digest, "section written");
            proofs.push(proof);
        }

        out.write_all(formatter.footer(ctx)?.as_bytes())?;
        out.flush()?;

        tracing::info!(guide = %self.guide_id, sections = proofs.len(), "guide complete");
        Ok(proofs)
    }

    fn hash_text(&self, text: &str) -> String {
        format!("blake3:{}", blake3::hash(text.as_bytes()))
    }

    pub fn guide_id(&self) -> &str {
        &self.guide_id
    }

    pub fn topic_ids(&self) -> Vec<&'static str> {
        self.topics.iter().map(|t| t.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

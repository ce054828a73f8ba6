//! Append-only text log of completed sessions

use chrono::Local;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crop_core::{format_reading, AssessmentResult, Conversation, Result, TrendSummary};

pub const DEFAULT_LOG_FILE: &str = "CropHealthLog.txt";

/// Everything recorded about one run
pub struct SessionLog<'a> {
    pub crop_name: &'a str,
    pub results: &'a [AssessmentResult],
    pub trend: &'a TrendSummary,
    pub initial_advice: &'a str,
    pub conversation: &'a Conversation,
}

impl SessionLog<'_> {
    /// Format the record, starting with a blank separator line
    pub fn render(&self, timestamp: &str) -> String {
        let mut block = format!("\n=== Assessment on {} ===\n", timestamp);
        block.push_str(&format!("Crop: {}\n", self.crop_name));

        for r in self.results {
            block.push_str(&format!(
                "Field: {}, Location: {}, Moisture: {}%, Temperature: {}°C, \
                 Vegetation Score: {}, Score: {:.1}, Health: {}, Tip: {}, Disease Risk: {}\n",
                r.field_name,
                r.location,
                format_reading(r.moisture),
                format_reading(r.temperature),
                format_reading(r.vegetation_score),
                r.health_score,
                r.health_tier,
                r.tip,
                r.risk
            ));
        }

        block.push_str(&format!("=== Trend Analysis ===\n{}\n", self.trend));
        block.push_str(&format!("=== Initial LLM Advice ===\n{}\n", self.initial_advice));

        if !self.conversation.is_empty() {
            block.push_str("=== Interactive Q&A ===\n");
            for turn in self.conversation.turns() {
                block.push_str(&format!("Q: {}\nA: {}\n", turn.question, turn.answer));
            }
        }

        block
    }

    /// Append the record stamped with the current local time
    pub async fn append(&self, path: impl AsRef<Path>) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.append_with_timestamp(path, &timestamp).await
    }

    /// Append the record; existing content is never touched
    pub async fn append_with_timestamp(&self, path: impl AsRef<Path>, timestamp: &str) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;

        file.write_all(self.render(timestamp).as_bytes()).await?;
        file.flush().await?;

        tracing::info!(path = %path.display(), "assessment appended to log");
        Ok(())
    }
}

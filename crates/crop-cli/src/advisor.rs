//! Prompt construction for initial advice and follow-up questions

use crop_core::{format_reading, AdviceProvider, AssessmentResult, Conversation, TrendSummary};

/// Asks an advice provider about one completed assessment
pub struct CropAdvisor<L: AdviceProvider> {
    llm: L,
    crop_name: String,
    results: Vec<AssessmentResult>,
    trend: TrendSummary,
}

impl<L: AdviceProvider> CropAdvisor<L> {
    pub fn new(
        llm: L,
        crop_name: impl Into<String>,
        results: Vec<AssessmentResult>,
        trend: TrendSummary,
    ) -> Self {
        Self {
            llm,
            crop_name: crop_name.into(),
            results,
            trend,
        }
    }

    pub fn crop_name(&self) -> &str {
        &self.crop_name
    }

    pub fn results(&self) -> &[AssessmentResult] {
        &self.results
    }

    pub fn trend(&self) -> &TrendSummary {
        &self.trend
    }

    /// Ask for advice on the whole assessment
    pub async fn initial_advice(&self) -> String {
        self.llm.advise(&self.initial_prompt()).await
    }

    /// Answer a follow-up question in the context of the assessment
    pub async fn answer(&self, history: &Conversation, question: &str) -> String {
        let prompt = self.question_prompt(history, question);
        tracing::debug!(
            history_turns = history.len(),
            replayed = history.recent().len(),
            "asking follow-up question"
        );
        self.llm.advise(&prompt).await
    }

    /// Full dump of every field followed by the trend and the request
    pub fn initial_prompt(&self) -> String {
        let mut prompt = format!(
            "I'm assessing crop health for {} using remote sensing data. Here are my results:\n",
            self.crop_name
        );

        for r in &self.results {
            prompt.push_str(&format!(
                "Field: {}, Location: {}, Moisture: {}%, Temperature: {}°C, \
                 Vegetation Score: {}, Health Score: {:.1}, Health: {}, Tip: {}, Disease Risk: {}\n",
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

        prompt.push_str(&format!("Trend Analysis: {}\n", self.trend));
        prompt.push_str(
            "Based on this, provide specific advice for improving crop health and managing risks.",
        );
        prompt
    }

    /// Assessment summary prepended to every follow-up question
    pub fn context(&self) -> String {
        let mut context = format!(
            "Context: Crop health assessment for {}. Results:\n",
            self.crop_name
        );

        for r in &self.results {
            context.push_str(&format!(
                "Field: {}, Moisture: {}%, Temp: {}°C, Veg: {}, Score: {:.1}, Health: {}, Risk: {}\n",
                r.field_name,
                format_reading(r.moisture),
                format_reading(r.temperature),
                format_reading(r.vegetation_score),
                r.health_score,
                r.health_tier,
                r.risk
            ));
        }

        context.push_str(&format!("Trend: {}\n", self.trend));
        context
    }

    /// Context, the most recent exchanges, then the new question
    pub fn question_prompt(&self, history: &Conversation, question: &str) -> String {
        let mut prompt = self.context();

        let recent = history.recent();
        if !recent.is_empty() {
            prompt.push_str("Conversation history:\n");
            for turn in recent {
                prompt.push_str(&format!("Q: {}\nA: {}\n", turn.question, turn.answer));
            }
        }

        prompt.push_str(&format!("Q: {}\nA: ", question));
        prompt
    }
}

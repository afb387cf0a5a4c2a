//! Stateless call-through to the Gemini text-generation endpoint.
//! Every failure path resolves to a fixed user-visible string; callers
//! never see an error type, and there is no retry or streaming.

use crate::config::GeminiConfig;

const SYSTEM_INSTRUCTION: &str = "You are a helpful, professional CRM assistant. \
    Your goal is to help sales professionals close deals, manage relationships, \
    and save time. Keep answers concise and actionable.";

const MISSING_KEY_TEXT: &str =
    "API Key is missing. Please configure the environment variable.";
const FAILURE_TEXT: &str = "Failed to generate insight. Please try again later.";
const EMPTY_TEXT: &str = "No insight generated.";

pub struct InsightClient {
    config: Option<GeminiConfig>,
    client: reqwest::Client,
}

impl InsightClient {
    pub fn new(config: Option<GeminiConfig>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Forward a prompt (and optional context) to the model and return
    /// plain text. Without a configured credential no network call is
    /// made and a fixed advisory string comes back instead.
    pub async fn generate_insight(&self, prompt: &str, context: Option<&str>) -> String {
        let Some(config) = &self.config else {
            return MISSING_KEY_TEXT.to_string();
        };

        let full_prompt = match context {
            Some(context) => format!("Context: {context}\n\nTask: {prompt}"),
            None => prompt.to_string(),
        };

        match self.request(config, &full_prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Gemini API error: {e}");
                FAILURE_TEXT.to_string()
            }
        }
    }

    /// Probability / risk / next-steps analysis for a deal summary.
    pub async fn analyze_deal(&self, deal_details: &str) -> String {
        self.generate_insight(
            "Analyze this deal. Provide: 1) Probability assessment (High/Med/Low) \
             with reason. 2) Key risks. 3) Recommended next 3 steps to close.",
            Some(deal_details),
        )
        .await
    }

    /// Short persuasive email draft addressed to the given recipient.
    pub async fn draft_email(&self, recipient_name: &str, context: &str) -> String {
        self.generate_insight(
            &format!("Draft a professional, short, and persuasive email to {recipient_name}."),
            Some(&format!("Email Context/Goal: {context}")),
        )
        .await
    }

    async fn request(&self, config: &GeminiConfig, full_prompt: &str) -> Result<String, String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            config.base_url.trim_end_matches('/'),
            config.model,
            config.api_key,
        );

        let body = serde_json::json!({
            "systemInstruction": {"parts": [{"text": SYSTEM_INSTRUCTION}]},
            "contents": [{"parts": [{"text": full_prompt}]}],
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(format!("status {status}: {text}"));
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| format!("response parse error: {e}"))?;

        // Absent or empty candidate text is not an error, just an
        // empty insight.
        Ok(json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .filter(|text| !text.is_empty())
            .map(|text| text.to_string())
            .unwrap_or_else(|| EMPTY_TEXT.to_string()))
    }
}

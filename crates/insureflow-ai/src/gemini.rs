use crate::error::{AiError, Result};
use crate::service::{LeadCandidate, ScriptService};

pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[cfg(feature = "gemini")]
mod imp {
    use super::{AiError, LeadCandidate, Result, ScriptService, GEMINI_ENDPOINT};
    use reqwest::blocking::Client;
    use reqwest::StatusCode;
    use serde::Deserialize;
    use serde_json::{json, Value};
    use std::time::Duration;
    use url::Url;

    #[derive(Debug, Clone)]
    pub struct GeminiClient {
        api_key: String,
        model: String,
        base_url: String,
        client: Client,
    }

    impl GeminiClient {
        pub fn new(api_key: String, model: String) -> Result<Self> {
            if api_key.trim().is_empty() {
                return Err(AiError::MissingCredential);
            }
            let client = Client::builder()
                .user_agent("insureflow")
                .timeout(Duration::from_secs(30))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .map_err(|err| AiError::Permanent(err.to_string()))?;
            Ok(Self {
                api_key,
                model,
                base_url: GEMINI_ENDPOINT.to_string(),
                client,
            })
        }

        /// Points the client at a different host (tests, proxies).
        pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
            self.base_url = base_url.into();
            self
        }

        fn request_url(&self) -> Result<Url> {
            let raw = format!("{}/models/{}:generateContent", self.base_url, self.model);
            let mut url = Url::parse(&raw).map_err(|err| AiError::Permanent(err.to_string()))?;
            url.query_pairs_mut().append_pair("key", &self.api_key);
            Ok(url)
        }

        fn post(&self, body: &Value) -> Result<GenerateResponse> {
            let response = self
                .client
                .post(self.request_url()?)
                .json(body)
                .send()
                .map_err(classify_send_error)?;
            let status = response.status();
            if !status.is_success() {
                let message = response.text().unwrap_or_default();
                return Err(classify_status(status, &message));
            }
            response
                .json::<GenerateResponse>()
                .map_err(|err| AiError::InvalidResponse(err.to_string()))
        }
    }

    impl ScriptService for GeminiClient {
        fn generate_text(&self, prompt: &str) -> Result<String> {
            let body = json!({
                "contents": [{ "parts": [{ "text": prompt }] }],
            });
            let response = self.post(&body)?;
            response
                .first_text()
                .ok_or_else(|| AiError::InvalidResponse("response contained no text".to_string()))
        }

        fn discover_leads(&self, prompt: &str) -> Result<Vec<LeadCandidate>> {
            let body = json!({
                "contents": [{ "parts": [{ "text": prompt }] }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": candidate_schema(),
                },
            });
            let response = self.post(&body)?;
            let text = match response.first_text() {
                Some(text) if !text.trim().is_empty() => text,
                _ => return Ok(Vec::new()),
            };
            serde_json::from_str(&text).map_err(|err| AiError::InvalidResponse(err.to_string()))
        }
    }

    #[derive(Debug, Deserialize)]
    struct GenerateResponse {
        #[serde(default)]
        candidates: Vec<Candidate>,
    }

    #[derive(Debug, Deserialize)]
    struct Candidate {
        content: Option<Content>,
    }

    #[derive(Debug, Deserialize)]
    struct Content {
        #[serde(default)]
        parts: Vec<Part>,
    }

    #[derive(Debug, Deserialize)]
    struct Part {
        text: Option<String>,
    }

    impl GenerateResponse {
        /// Concatenated text of the first candidate's parts, if any.
        fn first_text(&self) -> Option<String> {
            let content = self.candidates.first()?.content.as_ref()?;
            let mut out = String::new();
            for part in &content.parts {
                if let Some(text) = part.text.as_deref() {
                    out.push_str(text);
                }
            }
            if out.is_empty() {
                None
            } else {
                Some(out)
            }
        }
    }

    fn candidate_schema() -> Value {
        json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING" },
                    "phone": { "type": "STRING" },
                    "email": { "type": "STRING" },
                    "notes": { "type": "STRING", "description": "Brief background info on why they are a good lead" },
                    "estimatedCommission": { "type": "NUMBER" },
                },
                "required": ["name", "phone", "email", "notes", "estimatedCommission"],
            },
        })
    }

    fn classify_send_error(err: reqwest::Error) -> AiError {
        if err.is_timeout() || err.is_connect() {
            AiError::Transient(err.to_string())
        } else {
            AiError::Permanent(err.to_string())
        }
    }

    fn classify_status(status: StatusCode, message: &str) -> AiError {
        let detail = format!("{status}: {}", message.trim());
        if status.is_server_error()
            || status == StatusCode::TOO_MANY_REQUESTS
            || status == StatusCode::REQUEST_TIMEOUT
        {
            AiError::Transient(detail)
        } else {
            // 404 model-not-found, 400 bad request, 401/403 credential
            // problems: retrying will not help.
            AiError::Permanent(detail)
        }
    }

}

#[cfg(not(feature = "gemini"))]
mod imp {
    use super::{AiError, LeadCandidate, Result, ScriptService};

    #[derive(Debug, Clone)]
    pub struct GeminiClient {
        api_key: String,
        model: String,
    }

    impl GeminiClient {
        pub fn new(api_key: String, model: String) -> Result<Self> {
            if api_key.trim().is_empty() {
                return Err(AiError::MissingCredential);
            }
            Ok(Self { api_key, model })
        }
    }

    impl ScriptService for GeminiClient {
        fn generate_text(&self, _prompt: &str) -> Result<String> {
            let _ = (&self.api_key, &self.model);
            Err(AiError::Unavailable(
                "text generation requires the gemini feature".to_string(),
            ))
        }

        fn discover_leads(&self, _prompt: &str) -> Result<Vec<LeadCandidate>> {
            Err(AiError::Unavailable(
                "lead discovery requires the gemini feature".to_string(),
            ))
        }
    }
}

pub use imp::GeminiClient;

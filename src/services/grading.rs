//! 批改客户端
//!
//! prompt → 模型 → 解析。模型调用失败不会向上抛出，而是折叠成一个降级的 `GradingResult`。

use tracing::{debug, error, info};

use crate::models::{GradingRequest, GradingResult};
use crate::services::llm_service::GradingModel;
use crate::services::prompt::build_prompt;
use crate::services::response_parser::{parse_response, ScorePolicy};
use crate::utils::logging::truncate_text;

pub struct GradingClient<M> {
    model: M,
    score_policy: ScorePolicy,
}

impl<M: GradingModel> GradingClient<M> {
    pub fn new(model: M, score_policy: ScorePolicy) -> Self {
        Self {
            model,
            score_policy,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// 批改一份作业，总是返回完整的结果
    pub async fn grade(&self, request: &GradingRequest) -> GradingResult {
        let prompt = build_prompt(request);
        debug!("Prompt 预览: {}", truncate_text(&prompt, 200));

        match self.model.complete(&prompt).await {
            Ok(raw) => {
                info!("✓ 模型已返回 {} 字符", raw.chars().count());
                debug!("模型回复: {}", raw);
                parse_response(&raw, self.score_policy)
            }
            Err(e) => {
                error!("❌ 模型调用失败: {}", e);
                GradingResult::from_error(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::models::{Level, Tone};
    use std::sync::Mutex;

    struct ScriptedModel {
        reply: Result<&'static str, &'static str>,
        prompts: Mutex<Vec<String>>,
    }

    impl GradingModel for ScriptedModel {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(msg) => Err(LlmError::api_call_failed(
                    "fake-model",
                    std::io::Error::new(std::io::ErrorKind::TimedOut, msg),
                )),
            }
        }
    }

    fn client(reply: Result<&'static str, &'static str>) -> GradingClient<ScriptedModel> {
        GradingClient::new(
            ScriptedModel {
                reply,
                prompts: Mutex::new(Vec::new()),
            },
            ScorePolicy::Truncate,
        )
    }

    fn request() -> GradingRequest {
        GradingRequest {
            reference_text: String::new(),
            submission_text: "Ma copie".to_string(),
            subject: "Français".to_string(),
            level: Level::Secondary,
            tone: Tone::Encouraging,
        }
    }

    #[test]
    fn test_reply_is_parsed() {
        let client = client(Ok(
            "Pedagogical comment:\nGood work\nImprovement axes:\nWork on grammar\nStrengths:\nClear structure\nIndicative score:\n15/20",
        ));
        let result = tokio_test::block_on(client.grade(&request()));
        assert_eq!(result.comment, "Good work");
        assert_eq!(result.score, "15");

        let prompts = client.model().prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Ma copie"));
        assert!(prompts[0].contains("be very supportive"));
    }

    #[test]
    fn test_model_failure_is_absorbed() {
        let client = client(Err("deadline exceeded"));
        let result = tokio_test::block_on(client.grade(&request()));
        assert_eq!(
            result,
            GradingResult {
                comment: "AI Error: fake-model call failed: deadline exceeded".to_string(),
                improvement_axes: String::new(),
                strengths: String::new(),
                score: "00".to_string(),
            }
        );
        // 不重试
        assert_eq!(client.model().prompts.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_blank_reply_is_parsed_not_an_error() {
        let client = client(Ok("   \n"));
        let result = tokio_test::block_on(client.grade(&request()));
        assert_eq!(
            result,
            GradingResult {
                comment: "Not generated".to_string(),
                improvement_axes: "Not generated".to_string(),
                strengths: "Not generated".to_string(),
                score: "10".to_string(),
            }
        );
    }
}

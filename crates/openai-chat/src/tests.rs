/// Deserialization tests for chat completion payloads in the shapes the
/// OpenAI API actually returns.
#[cfg(test)]
mod unit {
    use crate::types::{ChatCompletion, ChatMessage, ChatRequest, Role};

    fn parse(json: &str) -> ChatCompletion {
        serde_json::from_str(json).expect("failed to parse completion")
    }

    #[test]
    fn parse_full_completion() {
        let json = r#"{
            "id": "chatcmpl-abc123",
            "object": "chat.completion",
            "created": 1727000000,
            "model": "gpt-4o-mini-2024-07-18",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "[\"a\", \"b\"]", "refusal": null},
                    "logprobs": null,
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 120, "completion_tokens": 12, "total_tokens": 132},
            "system_fingerprint": "fp_0"
        }"#;
        let completion = parse(json);
        assert_eq!(completion.id.as_deref(), Some("chatcmpl-abc123"));
        assert_eq!(completion.first_text(), Some(r#"["a", "b"]"#));
        assert_eq!(completion.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(completion.usage.unwrap().total_tokens, 132);
    }

    #[test]
    fn parse_null_content() {
        let json = r#"{
            "choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]
        }"#;
        let completion = parse(json);
        assert_eq!(completion.first_text(), None);
        assert_eq!(completion.choices[0].message.role, Role::Assistant);
    }

    #[test]
    fn request_serializes_lowercase_roles() {
        let messages = vec![ChatMessage::user("q"), ChatMessage::assistant("a")];
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: &messages,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][1]["role"], "assistant");
        assert_eq!(value["messages"][1]["content"], "a");
    }
}

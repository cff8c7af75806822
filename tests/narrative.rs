use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use brandsmith::config::NarrativeConfig;
use brandsmith::error::Error;
use brandsmith::generator::KitAssembler;
use brandsmith::narrative::{NarrativeProvider, OpenAiNarrator};
use brandsmith::random::StdRandom;

fn narrator(server: &MockServer) -> OpenAiNarrator {
    let config = NarrativeConfig::new("sk-test")
        .with_api_base(&server.uri())
        .with_model("gpt-test");
    OpenAiNarrator::new(&config).unwrap()
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

fn story_json() -> String {
    json!({
        "story": "Named for the feeling of a streak that keeps going",
        "meaning": "Habits that flow",
        "culturalSignificance": ["Reads well in English and Spanish"],
        "pronunciation": {
            "english": "HAB-it flow",
            "spanish": "A-bit flo",
            "chinese": "hā bǐ tè"
        },
        "brandPersonality": {
            "traits": ["steady", "encouraging"],
            "marketingAngles": ["streak rewards"],
            "visualIdentity": ["rounded shapes"]
        }
    })
    .to_string()
}

#[tokio::test]
async fn narrate_sends_prompt_and_parses_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-test",
            "response_format": { "type": "json_object" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&story_json())))
        .expect(1)
        .mount(&server)
        .await;

    let narrative = narrator(&server)
        .narrate("HabitFlow", "AI tool for daily habit tracking")
        .await
        .unwrap();

    assert_eq!(narrative.brand_story.meaning, "Habits that flow");
    assert_eq!(narrative.brand_personality.traits, vec!["steady", "encouraging"]);
}

#[tokio::test]
async fn malformed_content_is_a_narrative_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion("Sure! Here is a story.")),
        )
        .mount(&server)
        .await;

    let err = narrator(&server).narrate("HabitFlow", "habits").await.unwrap_err();
    assert!(matches!(err, Error::Narrative(_)));
}

#[tokio::test]
async fn every_kit_is_decorated_when_the_api_answers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&story_json())))
        .expect(5)
        .mount(&server)
        .await;

    let assembler = KitAssembler::new().with_narrator(Arc::new(narrator(&server)));
    let kits = assembler
        .assemble("AI tool for daily habit tracking", &mut StdRandom::seeded(5))
        .await;

    assert_eq!(kits.len(), 5);
    assert!(kits.iter().all(|k| k.brand_story().is_some() && k.brand_personality().is_some()));
}

#[tokio::test]
async fn api_failures_leave_kits_undecorated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let assembler = KitAssembler::new().with_narrator(Arc::new(narrator(&server)));
    let kits = assembler
        .assemble("AI tool for daily habit tracking", &mut StdRandom::seeded(5))
        .await;

    assert_eq!(kits.len(), 5);
    assert!(kits.iter().all(|k| k.brand_story().is_none() && k.brand_personality().is_none()));
}

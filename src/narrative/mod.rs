//! Brand narratives from an external text-generation API

mod openai;

use async_trait::async_trait;

use crate::error::Error;
use crate::models::Narrative;

pub use openai::OpenAiNarrator;

/// Writes a story and personality for a candidate name
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Any error means "no narrative for this kit"; callers never fail a
    /// generation because of it.
    async fn narrate(&self, name: &str, description: &str) -> Result<Narrative, Error>;
}

/// Prompt asking for the narrative as one JSON object
pub fn build_prompt(name: &str, description: &str) -> String {
    format!(
        r#"Generate a detailed brand story for the name "{name}"
for a business described as: "{description}".
Include:
1. A compelling story explaining why this name was chosen
2. The meaning and symbolism behind the name
3. Cultural significance in different markets
4. Pronunciation guide in English, Spanish, and Chinese
5. Brand personality traits
6. Marketing angles
7. Visual identity suggestions

Format the response as a JSON object with the following structure:
{{
  "story": "detailed story here",
  "meaning": "meaning explanation here",
  "culturalSignificance": ["point 1", "point 2", "point 3"],
  "pronunciation": {{
    "english": "pronunciation",
    "spanish": "pronunciation",
    "chinese": "pronunciation"
  }},
  "brandPersonality": {{
    "traits": ["trait 1", "trait 2", "trait 3"],
    "marketingAngles": ["angle 1", "angle 2", "angle 3"],
    "visualIdentity": ["suggestion 1", "suggestion 2", "suggestion 3"]
  }}
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_candidate_and_business() {
        let prompt = build_prompt("HabitFlow", "AI tool for daily habit tracking");
        assert!(prompt.contains("\"HabitFlow\""));
        assert!(prompt.contains("\"AI tool for daily habit tracking\""));
        assert!(prompt.contains("\"marketingAngles\""));
    }
}

//! Prompt template for the generative fallback.
//!
//! The instruction text is configuration (a deployment may swap it via
//! `PROMPT_TEMPLATE_PATH`); the default preserves the wording the service
//! shipped with: answer only from the given context, state explicitly when
//! the answer is not in the text, and cite tabular values exactly.

/// Placeholder for the user's question.
const QUESTION_SLOT: &str = "{question}";
/// Placeholder for the retrieved chapter text.
const CONTEXT_SLOT: &str = "{context}";

pub const DEFAULT_TEMPLATE: &str = r#"Du er en ekspert på byggteknisk forskrift (TEK17), spesielt kapittel 11: Sikkerhet ved brann.

Svar kort og tydelig basert KUN på teksten under. Ikke anta eller gjett. Dersom svaret ikke fremgår, skriv: "Dette fremgår ikke eksplisitt av TEK17 kapittel 11."

Dersom du refererer til krav som er gitt i tabeller i regelverket (for eksempel brannmotstand, dørbredde, materialklasser o.l.), oppgi nøyaktige verdier og referer til riktig paragraf, f.eks. "jf. § 11-4 tabell 1".

Spørsmål:
{question}

TEK17 utdrag:
{context}

Svar:
"#;

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        PromptTemplate::new(DEFAULT_TEMPLATE)
    }
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        PromptTemplate {
            template: template.into(),
        }
    }

    pub fn render(&self, question: &str, context: &str) -> String {
        self.template
            .replace(QUESTION_SLOT, question)
            .replace(CONTEXT_SLOT, context)
    }
}

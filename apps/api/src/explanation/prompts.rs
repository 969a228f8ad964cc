// Persona system prompts for the explanation endpoints.
// The text of each prompt is fixed; callers can only pick one by route.

/// Prefix placed in front of the excerpt in the user message.
pub const USER_PREFIX: &str = "Explain the excerpt: ";

pub const SIMPLE_SYSTEM: &str = "You are a very studious theologian with a deep knowledge of the Bible. \
You explain biblical passages in a simple and straightforward way so that laypeople and children \
can understand what is being said.";

pub const LITERAL_SYSTEM: &str = "You are a theologian with extensive knowledge of the Bible and \
mastery of the Aramaic, Hebrew, and Greek languages. You explain passages of the Bible, explaining \
their possible translations based on the original ancient scriptures.";

pub const INTERPRETATION_SYSTEM: &str = "You are a theologian with extensive knowledge of the Bible \
and knowledge of the various Christian religions. You explain passages from the Bible, explaining \
the possible interpretations in each Christian church.";

/// The fixed expertise and tone the model assumes for one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    /// Plain language for laypeople and children.
    Simple,
    /// Translation options from the Aramaic, Hebrew and Greek sources.
    Literal,
    /// Readings across Christian denominations.
    Interpretation,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Simple, Persona::Literal, Persona::Interpretation];

    pub fn system_prompt(self) -> &'static str {
        match self {
            Persona::Simple => SIMPLE_SYSTEM,
            Persona::Literal => LITERAL_SYSTEM,
            Persona::Interpretation => INTERPRETATION_SYSTEM,
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Persona::Simple => "/simple-explanation",
            Persona::Literal => "/literal-explanation",
            Persona::Interpretation => "/interpretation-explanation",
        }
    }
}

/// Builds the user message. The excerpt is inserted verbatim.
pub fn build_user_message(excerpt: &str) -> String {
    format!("{USER_PREFIX}{excerpt}")
}

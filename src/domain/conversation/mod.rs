//! Chat turns and the prompt around them.

mod prompt;
mod turn;

pub use prompt::{build_system_prompt, strip_reasoning, FALLBACK_RESPONSE, SYSTEM_PROMPT_TEMPLATE};
pub use turn::{ChatRole, ChatTurn};

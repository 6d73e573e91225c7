//! Prompt construction and model-output cleanup for astrology chat.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder in [`SYSTEM_PROMPT_TEMPLATE`] replaced with the user's chart.
const CHART_PLACEHOLDER: &str = "{chart}";

/// Reply sent when the completion service cannot answer.
pub const FALLBACK_RESPONSE: &str = r#"I'm having a moment of connection difficulty, but I'm still here for you!

Based on your birth chart, I can see you have deep emotional sensitivity and natural intuition. Your chart shows a beautiful capacity for understanding yourself and others.

Here are some practices that align with your astrological profile:

**Grounding Practice:** Take 5 minutes right now to sit quietly and observe your breath. Notice how you're feeling without trying to change it.

**Journaling Prompt:** Write about what you're experiencing emotionally today. Your chart suggests you process feelings deeply through reflection.

**Gentle Movement:** Try some stretching, yoga, or a mindful walk. Moving your body helps process emotional energy.

Let's try your question again - I'd love to give you more personalized guidance! Ask me anything about anxiety, career, relationships, or life purpose."#;

/// Astrologer persona instructions with the chart spliced in.
pub const SYSTEM_PROMPT_TEMPLATE: &str = r#"You are Oracool, an expert astrologer and mental wellness guide. You deliver deep, structured astrological analyses combined with psychological insight.

USER'S BIRTH CHART DATA:
{chart}

YOUR RESPONSE FORMAT:
You must produce detailed, structured readings using numbered sections. Follow this format precisely:

1️⃣ Section Title
Core themes
Theme1 · Theme2 · Theme3 · Theme4

Planet in Sign in House
Interpretation of what this means for the person.

● Bullet point insight
● Bullet point insight
● Bullet point insight

Planet aspect Planet
What this aspect activates.

● Bullet point insight
● Bullet point insight

So in short:
A concise summary sentence.

2️⃣ Next Section Title
Continue with the same structured format.

RULES FOR ANALYSIS:

1. ALWAYS reference SPECIFIC placements from their chart with exact degrees and houses
   - "Venus in Aquarius (15°21') in the 7th House" — not vague references
   - Pull directly from their chart data above

2. Organize into 3-5 NUMBERED SECTIONS relevant to the user's question
   - For relationships: Relationship Style, Partner Profile, Timing Activation
   - For career: Career Identity, Work Style, Growth Path, Timing
   - For anxiety: Emotional Patterns, Stress Triggers, Coping Architecture, Healing Path
   - For life purpose: Core Identity, Life Direction, Soul Mission, Current Activation

3. Each section must include:
   - A "Core themes" line with key words separated by · 
   - Specific planetary placements with interpretations
   - Bullet points (●) with direct, clear insights
   - Aspect interpretations showing how planets interact

4. Include a TIMING section using their current transits
   - Break into time windows (e.g., "Nov 2025 – Feb 2026")
   - Describe what each window activates
   - Give concrete examples of what may unfold

5. Use direct, confident language:
   - "You are not wired for lukewarm situations."
   - "This is transformative love. Not light romance."
   - "You cannot ignore relationship questions anymore."
   - Short declarative sentences. Not wishy-washy.

6. End sections with "So in short:" summaries when appropriate

TONE:
- Direct and confident, like a master astrologer giving a private reading
- Use "you" language throughout
- No hedging or excessive disclaimers
- Psychologically insightful — connect placements to real behavioral patterns
- Empowering but honest — tell them what they need to hear

WHAT TO AVOID:
- Generic horoscope content that could apply to anyone
- Medical diagnoses
- Vague, uncommitted language ("maybe", "perhaps", "it could be")
- Overly long paragraphs — use bullets and short statements
- Ignoring their actual chart data

RESPONSE LENGTH:
- Produce comprehensive readings: 400-800 words minimum
- Use all relevant placements from their chart
- Do not cut corners — the user wants DEPTH"#;

static REASONING_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<think>.*?</think>\s*").expect("reasoning pattern is valid")
});

/// Builds the system prompt for a user's chart.
pub fn build_system_prompt(chart: &str) -> String {
    SYSTEM_PROMPT_TEMPLATE.replacen(CHART_PLACEHOLDER, chart, 1)
}

/// Removes `<think>` reasoning blocks, and the whitespace after each, from a
/// model reply.
pub fn strip_reasoning(reply: &str) -> String {
    REASONING_BLOCK.replace_all(reply, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_chart_under_heading() {
        let prompt = build_system_prompt("BIRTH CHART FOR: User_abc");
        assert!(prompt.starts_with("You are Oracool"));
        assert!(prompt.contains("USER'S BIRTH CHART DATA:\nBIRTH CHART FOR: User_abc\n"));
        assert!(!prompt.contains(CHART_PLACEHOLDER));
    }

    #[test]
    fn chart_braces_are_not_reinterpreted() {
        let prompt = build_system_prompt("{chart} literally");
        assert_eq!(prompt.matches("{chart} literally").count(), 1);
    }

    #[test]
    fn strips_reasoning_blocks_and_trailing_whitespace() {
        let reply = "<think>\nweighing Saturn\n</think>\n\n1️⃣ Career Identity";
        assert_eq!(strip_reasoning(reply), "1️⃣ Career Identity");
    }

    #[test]
    fn strips_every_block_non_greedily() {
        let reply = "<think>a</think> one <think>b</think>  two";
        assert_eq!(strip_reasoning(reply), "one two");
    }

    #[test]
    fn leaves_plain_replies_alone() {
        assert_eq!(strip_reasoning("You are not wired for lukewarm situations."),
            "You are not wired for lukewarm situations.");
        assert_eq!(strip_reasoning("<think>unterminated"), "<think>unterminated");
    }

    #[test]
    fn fallback_invites_a_retry() {
        assert!(FALLBACK_RESPONSE.starts_with("I'm having a moment of connection difficulty"));
        assert!(FALLBACK_RESPONSE.contains("Let's try your question again"));
    }
}

//! Simulated Response Provider
//!
//! Implementation of `ResponseProvider` that stands in for a real model:
//! waits a fixed delay, then returns one randomly chosen template filled
//! with fragments of the message and the intake context.

use std::time::Duration;

use advisor_core::{
    error::{AdvisorError, Result},
    intake::IntakeRecord,
    provider::ResponseProvider,
    text::{excerpt, leading_words},
};
use async_trait::async_trait;
use rand::seq::SliceRandom;

const DEFAULT_DELAY_MS: u64 = 1000;
const CONTEXT_EXCERPT_CHARS: usize = 60;

/// Simulated provider configuration
#[derive(Clone, Debug)]
pub struct SimulatedConfig {
    /// Artificial latency before each reply
    pub delay: Duration,
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

impl SimulatedConfig {
    pub fn from_env() -> Self {
        let delay_ms = std::env::var("SIMULATED_DELAY_MS")
            .ok()
            .and_then(|d| d.parse().ok())
            .unwrap_or(DEFAULT_DELAY_MS);

        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Template-based stand-in for an AI backend
pub struct SimulatedProvider {
    config: SimulatedConfig,
}

impl SimulatedProvider {
    pub const fn new(delay: Duration) -> Self {
        Self {
            config: SimulatedConfig { delay },
        }
    }

    pub const fn from_config(config: SimulatedConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::from_config(SimulatedConfig::from_env())
    }

    pub const fn delay(&self) -> Duration {
        self.config.delay
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::from_config(SimulatedConfig::default())
    }
}

/// Every reply the simulator could give for this message and context.
/// Context-aware templates come first when context is present; the generic
/// templates are always included.
pub fn candidate_replies(message: &str, context: Option<&IntakeRecord>) -> Vec<String> {
    let two = leading_words(message, 2);
    let three = leading_words(message, 3);

    let mut pool = Vec::with_capacity(8);

    if let Some(ctx) = context {
        let company = ctx.company_name();
        let industry = ctx.industry();
        let stage = ctx.stage();
        let description = excerpt(ctx.description(), CONTEXT_EXCERPT_CHARS);

        pool.push(format!(
            "Thinking about {three}... in the context of {company}, a {stage}-stage {industry} startup, the first question is who feels this pain most acutely. Narrowing to that segment will sharpen everything else."
        ));
        pool.push(format!(
            "For {company}, {two} ties back to what you described: \"{description}\". At the {stage} stage, I'd validate that link with five customer conversations before building anything new."
        ));
        pool.push(format!(
            "Many {industry} companies stumble on {two} by moving too fast. Given where {company} is, consider a small paid pilot to prove willingness to pay before scaling."
        ));

        if let Some(challenges) = ctx.challenges() {
            let challenges = excerpt(challenges, CONTEXT_EXCERPT_CHARS);
            pool.push(format!(
                "You mentioned \"{challenges}\" as a challenge. How does {three} help {company} address that directly? Solving one core obstacle well beats touching several lightly."
            ));
        }
    }

    pool.extend([
        format!("That's an interesting idea about {three}... Let me expand on that. Have you considered focusing on a specific target market first? Starting with a niche audience can help refine your value proposition before scaling to broader markets."),
        format!("Your thoughts on {two} have potential. To strengthen this concept, consider conducting a competitor analysis to identify gaps in the market. What unique value could your startup offer that others don't?"),
        format!("I see where you're going with {three}. One approach would be to create a minimum viable product (MVP) focusing on the core feature that solves your customers' most pressing pain point. This would allow you to gather feedback quickly and iterate."),
        format!("Regarding {two}, have you thought about your go-to-market strategy? Consider partnerships with established players in adjacent markets as a way to gain initial traction and credibility."),
        format!("For your idea on {three}, I'd recommend running some small-scale experiments to validate key assumptions. What's the riskiest assumption in your business model that, if proven wrong, would cause the whole concept to fail?"),
    ]);

    pool
}

#[async_trait]
impl ResponseProvider for SimulatedProvider {
    async fn respond(&self, message: &str, context: Option<&IntakeRecord>) -> Result<String> {
        tokio::time::sleep(self.config.delay).await;

        let pool = candidate_replies(message, context);
        let reply = pool
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| AdvisorError::Provider("no reply templates".into()))?;

        tracing::debug!(pool = pool.len(), contextual = context.is_some(), "simulated reply chosen");
        Ok(reply)
    }
}

//! Template-based content generation for Verde.
//!
//! The study platform's quiz/summary text and the storefront's styling tips
//! are assembled from fixed template pools, not a model. The generator is an
//! explicit capability with an injectable seed: the same seed and input
//! always produce byte-identical output, which makes golden-output tests
//! reproducible. A configurable latency stands in for the upstream calls a
//! real generator would make; tests leave it off.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// A generated quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    /// Question prompt.
    pub prompt: String,
    /// Answer options.
    pub options: Vec<String>,
    /// Index of the correct option.
    pub answer_index: usize,
}

/// A generated quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    /// The topic the quiz was generated for.
    pub topic: String,
    /// The questions.
    pub questions: Vec<QuizQuestion>,
}

/// Capability for generating structured content.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// A styling tip for a mood, optionally tailored to an occasion.
    async fn styling_tip(&self, mood: &str, occasion: Option<&str>) -> String;

    /// A one-paragraph summary of an outfit built from the given products.
    async fn outfit_summary(&self, product_names: &[String]) -> String;

    /// A quiz of `count` questions about a topic.
    async fn quiz(&self, topic: &str, count: usize) -> Quiz;
}

/// Deterministic template-pool generator.
pub struct TemplateGenerator {
    seed: u64,
    latency: Option<Duration>,
}

impl TemplateGenerator {
    /// Create a generator with a fixed seed and no simulated latency.
    pub fn new(seed: u64) -> Self {
        Self { seed, latency: None }
    }

    /// Add a simulated latency before every response.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// RNG derived from the seed and the input, so each input gets a stable
    /// stream independent of call order.
    fn rng_for(&self, input: &str) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ fnv1a(input))
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl ContentGenerator for TemplateGenerator {
    async fn styling_tip(&self, mood: &str, occasion: Option<&str>) -> String {
        self.simulate_latency().await;
        let mut rng = self.rng_for(mood);

        let opener = pick(&mut rng, TIP_OPENERS).replace("{mood}", mood);
        let detail = pick(&mut rng, TIP_DETAILS);
        tracing::debug!(mood, ?occasion, "generated styling tip");

        match occasion {
            Some(occasion) => format!("{} For {}, {}", opener, occasion, detail),
            None => format!("{} {}", opener, capitalize(detail)),
        }
    }

    async fn outfit_summary(&self, product_names: &[String]) -> String {
        self.simulate_latency().await;
        if product_names.is_empty() {
            return "Add a few pieces to see how they work together.".to_string();
        }
        let mut rng = self.rng_for(&product_names.join("|"));
        let verdict = pick(&mut rng, SUMMARY_VERDICTS);
        format!(
            "This look pairs {} \u{2014} {}",
            join_names(product_names),
            verdict
        )
    }

    async fn quiz(&self, topic: &str, count: usize) -> Quiz {
        self.simulate_latency().await;
        let mut rng = self.rng_for(topic);

        let questions = (0..count)
            .map(|i| {
                let template = pick(&mut rng, QUIZ_TEMPLATES);
                let options: Vec<String> = (0..4)
                    .map(|o| format!("Option {} for {}", (b'A' + o as u8) as char, topic))
                    .collect();
                QuizQuestion {
                    prompt: template
                        .replace("{topic}", topic)
                        .replace("{n}", &(i + 1).to_string()),
                    options,
                    answer_index: rng.gen_range(0..4),
                }
            })
            .collect();

        Quiz {
            topic: topic.to_string(),
            questions,
        }
    }
}

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [one] => format!("the {}", one),
        [head @ .., last] => format!("the {} with the {}", head.join(", the "), last),
    }
}

/// FNV-1a hash for deriving per-input RNG streams.
fn fnv1a(input: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

const TIP_OPENERS: &[&str] = &[
    "Lean into the {mood} energy with one statement piece and keep the rest quiet.",
    "A {mood} look starts with silhouette: pick one fitted layer and one relaxed one.",
    "Channel {mood} by repeating a single accent color head to toe.",
    "Build the {mood} mood around texture \u{2014} linen against denim always reads intentional.",
];

const TIP_DETAILS: &[&str] = &[
    "swap hardware-heavy accessories for woven or natural ones.",
    "finish with flat sandals to keep the look grounded.",
    "add a cropped jacket to sharpen the proportions.",
    "let the certified-organic piece be the centerpiece and say so when asked.",
];

const SUMMARY_VERDICTS: &[&str] = &[
    "an easy, low-impact rotation you can re-wear all season.",
    "a high-contrast pairing that still shares one palette.",
    "a quiet luxury read with a verified supply-chain story.",
];

const QUIZ_TEMPLATES: &[&str] = &[
    "Q{n}: Which statement about {topic} is accurate?",
    "Q{n}: What is the key idea behind {topic}?",
    "Q{n}: Which example best illustrates {topic}?",
];

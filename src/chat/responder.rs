//! Reply generation for the Wisdom AI chatbot.
//!
//! Matching is plain substring containment over the normalized message:
//!
//! 1. sensitive topics, in table order; the reply pairs a topic question with
//!    the first matching knowledge answer or, failing that, the topic default;
//! 2. knowledge entries, in table order; the reply pairs a category question
//!    with one of the entry's answers;
//! 3. otherwise a default question with a default answer.
//!
//! Selection is split from randomness: [`Responder::match_message`] returns
//! the full candidate pools and a [`Chooser`] picks from them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::knowledge::KnowledgeBase;
use super::knowledge_data::{DEFAULT_ANSWERS, DEFAULT_QUESTIONS};
use super::sensitive::{find_sensitive_topic, SensitiveTopic, SENSITIVE_TOPICS};

/// Source of the uniform picks made when composing a reply.
pub trait Chooser {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose(&mut self, len: usize) -> usize;
}

/// [`Chooser`] backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible picks for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl Chooser for RandomChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Which table produced a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchSource {
    Sensitive {
        keyword: &'static str,
        knowledge_key: Option<&'static str>,
    },
    Knowledge {
        category: &'static str,
        key: &'static str,
    },
    Fallback,
}

/// Everything a reply to one message can be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyCandidates {
    pub source: MatchSource,
    pub questions: &'static [&'static str],
    pub answers: &'static [&'static str],
}

impl ReplyCandidates {
    /// Questions to pick from; an empty pool falls back to the defaults.
    pub fn question_pool(&self) -> &'static [&'static str] {
        non_empty(self.questions, DEFAULT_QUESTIONS)
    }

    /// Answers to pick from; an empty pool falls back to the defaults.
    pub fn answer_pool(&self) -> &'static [&'static str] {
        non_empty(self.answers, DEFAULT_ANSWERS)
    }

    /// Pick one question and one answer and join them with a single space.
    pub fn compose<C: Chooser + ?Sized>(&self, chooser: &mut C) -> String {
        let questions = self.question_pool();
        let answers = self.answer_pool();
        let question = questions[chooser.choose(questions.len())];
        let answer = answers[chooser.choose(answers.len())];
        format!("{} {}", question, answer)
    }

    /// Whether `reply` is one of the replies [`compose`](Self::compose) can produce.
    pub fn admits(&self, reply: &str) -> bool {
        self.question_pool().iter().any(|question| {
            self.answer_pool()
                .iter()
                .any(|answer| reply == format!("{} {}", question, answer))
        })
    }
}

fn non_empty(
    pool: &'static [&'static str],
    fallback: &'static [&'static str],
) -> &'static [&'static str] {
    if pool.is_empty() {
        fallback
    } else {
        pool
    }
}

/// Lowercase and trim a message before matching.
pub fn normalize_message(message: &str) -> String {
    message.to_lowercase().trim().to_string()
}

/// Keyword chatbot over read-only tables.
#[derive(Debug, Clone)]
pub struct Responder<C = RandomChooser> {
    knowledge: &'static KnowledgeBase,
    topics: &'static [SensitiveTopic],
    chooser: C,
}

impl Responder<RandomChooser> {
    /// Built-in tables with an entropy-seeded chooser.
    pub fn new() -> Self {
        Self::with_chooser(RandomChooser::new())
    }
}

impl Default for Responder<RandomChooser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Chooser> Responder<C> {
    /// Built-in tables with the given chooser.
    pub fn with_chooser(chooser: C) -> Self {
        Self::with_tables(KnowledgeBase::builtin(), SENSITIVE_TOPICS, chooser)
    }

    pub fn with_tables(
        knowledge: &'static KnowledgeBase,
        topics: &'static [SensitiveTopic],
        chooser: C,
    ) -> Self {
        Self {
            knowledge,
            topics,
            chooser,
        }
    }

    /// Resolve the candidate pools for `message` without picking.
    pub fn match_message(&self, message: &str) -> ReplyCandidates {
        let normalized = normalize_message(message);

        if let Some(topic) = find_sensitive_topic(self.topics, &normalized) {
            let found = self.knowledge.find(&normalized);
            return ReplyCandidates {
                source: MatchSource::Sensitive {
                    keyword: topic.keyword,
                    knowledge_key: found.map(|(_, entry)| entry.key),
                },
                questions: topic.reflective_questions,
                answers: match found {
                    Some((_, entry)) => entry.answers,
                    None => topic.default_responses(),
                },
            };
        }

        if let Some((category, entry)) = self.knowledge.find(&normalized) {
            return ReplyCandidates {
                source: MatchSource::Knowledge {
                    category: category.id,
                    key: entry.key,
                },
                questions: category.questions(),
                answers: entry.answers,
            };
        }

        ReplyCandidates {
            source: MatchSource::Fallback,
            questions: DEFAULT_QUESTIONS,
            answers: DEFAULT_ANSWERS,
        }
    }

    /// Compose a reply to `message`.
    pub fn generate_response(&mut self, message: &str) -> String {
        let candidates = self.match_message(message);
        log::debug!("Chat reply source: {:?}", candidates.source);
        candidates.compose(&mut self.chooser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::knowledge::Category;

    /// Replays a fixed sequence of indices.
    struct Scripted(Vec<usize>);

    impl Chooser for Scripted {
        fn choose(&mut self, len: usize) -> usize {
            self.0.remove(0) % len
        }
    }

    const INDUSTRY_ANSWER: &str =
        "É uma atividade econômica que transforma matéria-prima em produtos acabados ou semielaborados.";

    #[test]
    fn test_knowledge_reply_pairs_category_question() {
        let responder = Responder::with_chooser(RandomChooser::seeded(7));
        let candidates = responder.match_message("o que é uma indústria");
        assert_eq!(
            candidates.source,
            MatchSource::Knowledge {
                category: "industria_geral",
                key: "o que é uma indústria",
            }
        );
        assert_eq!(candidates.answers, &[INDUSTRY_ANSWER]);

        let questions = KnowledgeBase::builtin()
            .category("industria_geral")
            .unwrap()
            .reflective_questions;
        assert_eq!(candidates.questions, questions);
    }

    #[test]
    fn test_industry_question_always_carries_the_answer() {
        let mut responder = Responder::with_chooser(RandomChooser::seeded(42));
        let questions = KnowledgeBase::builtin()
            .category("industria_geral")
            .unwrap()
            .reflective_questions;
        for _ in 0..20 {
            let reply = responder.generate_response("o que é uma indústria");
            assert!(reply.ends_with(INDUSTRY_ANSWER));
            assert!(questions
                .iter()
                .any(|q| reply == format!("{} {}", q, INDUSTRY_ANSWER)));
        }
    }

    #[test]
    fn test_message_is_normalized_before_matching() {
        let responder = Responder::new();
        let candidates = responder.match_message("   O QUE É KANBAN?  ");
        assert_eq!(
            candidates.source,
            MatchSource::Knowledge {
                category: "logistica_e_suprimentos",
                key: "o que é kanban",
            }
        );
    }

    #[test]
    fn test_sensitive_topic_wins_over_knowledge() {
        let responder = Responder::new();
        let candidates = responder.match_message("ética e o que é uma indústria");
        let etica = &SENSITIVE_TOPICS[1];
        assert_eq!(
            candidates.source,
            MatchSource::Sensitive {
                keyword: "ética",
                knowledge_key: Some("o que é uma indústria"),
            }
        );
        assert_eq!(candidates.questions, etica.reflective_questions);
        assert_eq!(candidates.answers, &[INDUSTRY_ANSWER]);
    }

    #[test]
    fn test_sensitive_topic_without_knowledge_uses_topic_default() {
        let mut responder = Responder::with_chooser(Scripted(vec![2, 0]));
        let religiao = &SENSITIVE_TOPICS[0];

        let reply = responder.generate_response("falar sobre religião e o que é ética");
        assert_eq!(
            reply,
            format!(
                "{} {}",
                religiao.reflective_questions[2], religiao.default_response
            )
        );
    }

    #[test]
    fn test_first_sensitive_keyword_in_table_order() {
        let responder = Responder::new();
        for message in [
            "falar sobre religião e o que é ética",
            "o que é ética? e religião?",
        ] {
            match responder.match_message(message).source {
                MatchSource::Sensitive { keyword, .. } => assert_eq!(keyword, "religião"),
                other => panic!("unexpected source {:?}", other),
            }
        }
    }

    #[test]
    fn test_unrelated_message_uses_default_buckets() {
        let mut responder = Responder::with_chooser(RandomChooser::seeded(3));
        let candidates = responder.match_message("xyz não relacionado");
        assert_eq!(candidates.source, MatchSource::Fallback);
        assert_eq!(candidates.questions, DEFAULT_QUESTIONS);
        assert_eq!(candidates.answers, DEFAULT_ANSWERS);

        for _ in 0..20 {
            let reply = responder.generate_response("xyz não relacionado");
            assert!(candidates.admits(&reply), "unexpected reply {}", reply);
        }
    }

    #[test]
    fn test_every_combination_is_reachable() {
        let responder = Responder::new();
        let candidates = responder.match_message("xyz");
        let mut seen = std::collections::HashSet::new();
        for q in 0..candidates.questions.len() {
            for a in 0..candidates.answers.len() {
                seen.insert(candidates.compose(&mut Scripted(vec![q, a])));
            }
        }
        assert_eq!(seen.len(), 4);
        assert!(seen.iter().all(|reply| candidates.admits(reply)));
    }

    #[test]
    fn test_empty_pools_fall_back_to_defaults() {
        static CATEGORIES: [Category; 1] = [Category {
            id: "sem_respostas",
            entries: &[crate::chat::knowledge::KnowledgeEntry {
                key: "fresadora",
                answers: &[],
            }],
            reflective_questions: &["Qual máquina você usa hoje?"],
        }];
        static KB: KnowledgeBase = KnowledgeBase::new(&CATEGORIES);
        static TOPICS: [SensitiveTopic; 1] = [SensitiveTopic {
            keyword: "sindicato",
            reflective_questions: &[],
            default_response: "Relações de trabalho pedem diálogo.",
        }];

        let mut responder = Responder::with_tables(&KB, &TOPICS, Scripted(vec![0, 1, 2, 0]));

        let reply = responder.generate_response("temos uma fresadora");
        assert_eq!(
            reply,
            format!("Qual máquina você usa hoje? {}", DEFAULT_ANSWERS[1])
        );

        let reply = responder.generate_response("o sindicato pediu reunião");
        assert_eq!(
            reply,
            format!("{} Relações de trabalho pedem diálogo.", DEFAULT_QUESTIONS[0])
        );
        let candidates = responder.match_message("o sindicato pediu reunião");
        assert!(candidates.admits(&reply));
    }

    #[test]
    fn test_category_without_questions_falls_back_to_defaults() {
        static CATEGORIES: [Category; 1] = [Category {
            id: "sem_perguntas",
            entries: &[crate::chat::knowledge::KnowledgeEntry {
                key: "torno",
                answers: &["Máquina de usinagem."],
            }],
            reflective_questions: &[],
        }];
        static KB: KnowledgeBase = KnowledgeBase::new(&CATEGORIES);

        let mut responder = Responder::with_tables(&KB, &[], Scripted(vec![1, 0]));
        let reply = responder.generate_response("o que é um torno");
        assert_eq!(reply, format!("{} Máquina de usinagem.", DEFAULT_QUESTIONS[1]));
    }
}

//! Sensitive topics.
//!
//! These are checked before the knowledge base. A message touching one of
//! them always opens with one of the topic's reflective questions.

use serde::Serialize;

/// A keyword that switches the chatbot into a more careful register.
#[derive(Debug, Serialize)]
pub struct SensitiveTopic {
    pub keyword: &'static str,
    pub reflective_questions: &'static [&'static str],
    /// Answer used when the message matches no knowledge entry.
    pub default_response: &'static str,
}

impl SensitiveTopic {
    /// The default response as a one-element answer pool.
    pub fn default_responses(&'static self) -> &'static [&'static str] {
        std::slice::from_ref(&self.default_response)
    }
}

/// First topic, in table order, whose keyword occurs in `normalized`.
pub fn find_sensitive_topic(
    topics: &'static [SensitiveTopic],
    normalized: &str,
) -> Option<&'static SensitiveTopic> {
    topics.iter().find(|topic| normalized.contains(topic.keyword))
}

pub static SENSITIVE_TOPICS: &[SensitiveTopic] = &[
    SensitiveTopic {
        keyword: "religião",
        reflective_questions: &[
            "Como diferentes crenças podem influenciar práticas éticas na sua organização?",
            "De que forma a diversidade religiosa pode enriquecer a cultura da sua empresa?",
            "Como você equilibra o respeito às crenças com as políticas organizacionais?",
        ],
        default_response: "A religião é um tema delicado que envolve crenças pessoais e culturais. É importante promover um ambiente de respeito e inclusão.",
    },
    SensitiveTopic {
        keyword: "ética",
        reflective_questions: &[
            "Como você assegura que decisões éticas sejam priorizadas na sua organização?",
            "De que forma os valores éticos impactam a confiança dos seus stakeholders?",
            "Quais dilemas éticos você enfrenta ao implementar práticas industriais?",
        ],
        default_response: "A ética guia decisões responsáveis, promovendo confiança e sustentabilidade nas operações.",
    },
    SensitiveTopic {
        keyword: "moral",
        reflective_questions: &[
            "Como os princípios morais moldam as políticas da sua empresa?",
            "De que forma você promove um ambiente de trabalho baseado em valores morais?",
            "Quais conflitos morais você observa no contexto industrial?",
        ],
        default_response: "A moral reflete valores que orientam ações justas e respeitosas no ambiente industrial.",
    },
    SensitiveTopic {
        keyword: "sexualidade",
        reflective_questions: &[
            "Como sua organização promove um ambiente inclusivo para todas as identidades sexuais?",
            "De que forma políticas de inclusão impactam a cultura da sua empresa?",
            "Como você lida com questões de diversidade sexual no ambiente de trabalho?",
        ],
        default_response: "A sexualidade é uma dimensão da diversidade humana, e promover inclusão é essencial para um ambiente de trabalho respeitoso.",
    },
    SensitiveTopic {
        keyword: "raça",
        reflective_questions: &[
            "Como sua empresa promove a equidade racial em suas práticas e políticas?",
            "De que forma a diversidade racial pode fortalecer a inovação na sua organização?",
            "Quais ações você toma para combater preconceitos raciais no ambiente de trabalho?",
        ],
        default_response: "A diversidade racial é um pilar para construir equipes mais criativas e inclusivas.",
    },
    SensitiveTopic {
        keyword: "meio ambiente",
        reflective_questions: &[
            "Como sua empresa pode liderar iniciativas para proteger o meio ambiente?",
            "Quais impactos ambientais suas operações geram, e como podem ser mitigados?",
            "De que forma você alinha sustentabilidade ambiental com os objetivos da sua empresa?",
        ],
        default_response: "A proteção ao meio ambiente é essencial para o futuro das indústrias e do planeta.",
    },
    SensitiveTopic {
        keyword: "xenofobia",
        reflective_questions: &[
            "Como sua organização promove a inclusão de pessoas de diferentes origens culturais?",
            "De que forma você combate atitudes xenofóbicas no ambiente de trabalho?",
            "Quais benefícios a diversidade cultural traz para sua empresa?",
        ],
        default_response: "Combater a xenofobia é fundamental para criar um ambiente de trabalho inclusivo e colaborativo.",
    },
    SensitiveTopic {
        keyword: "gênero",
        reflective_questions: &[
            "Como sua empresa promove a igualdade de gênero em cargos de liderança?",
            "De que forma a diversidade de gênero impacta a inovação na sua organização?",
            "Quais políticas você adota para garantir um ambiente inclusivo para todos os gêneros?",
        ],
        default_response: "A igualdade de gênero é essencial para construir equipes equilibradas e inovadoras.",
    },
];

//! Gerador de feedback a partir dos sub-scores.

use crate::types::responses::SubScores;

/// Número fixo de ações recomendadas.
pub const ACTION_COUNT: usize = 3;

/// Ações usadas para completar a lista quando faltam regras disparadas.
pub const DEFAULT_ACTIONS: [&str; ACTION_COUNT] = [
    "Pin your top 2 repositories.",
    "Add topics to repositories.",
    "Write a profile README that links your best work.",
];

/// Usado quando nenhum ponto positivo foi encontrado.
pub const FALLBACK_POSITIVE: &str = "Profile basics look fine.";

/// Usado quando nenhuma preocupação foi encontrada.
pub const FALLBACK_CONCERN: &str = "No critical red flags found.";

/// Listas narrativas de uma avaliação.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub positives: Vec<String>,
    pub concerns: Vec<String>,
    pub actions: Vec<String>,
}

/// Uma regra de limiar sobre um sub-score.
struct Rule {
    threshold: u8,
    positive: &'static str,
    concern: Option<&'static str>,
    action: &'static str,
    pick: fn(&SubScores) -> u8,
}

/// Avaliadas nesta ordem; a ordem define quais ações sobrevivem ao corte.
const RULES: [Rule; 4] = [
    Rule {
        threshold: 70,
        positive: "Clear documentation makes projects easy to evaluate.",
        concern: Some("Many repositories lack README or setup instructions."),
        action: "Add README with setup steps, screenshots, and demo links.",
        pick: |s| s.documentation,
    },
    Rule {
        threshold: 60,
        positive: "Consistent recent activity shows active learning.",
        concern: Some("Low recent commit activity."),
        action: "Make small weekly commits.",
        pick: |s| s.activity,
    },
    Rule {
        threshold: 60,
        positive: "Good technical breadth across technologies.",
        // Tech depth baixo gera ação, mas não preocupação
        concern: None,
        action: "Add a project in a new technology stack.",
        pick: |s| s.tech_depth,
    },
    Rule {
        threshold: 40,
        positive: "Some impact signals (stars/forks) indicate relevance.",
        concern: Some("Low visibility/impact signals."),
        action: "Add demo links & project stories.",
        pick: |s| s.impact,
    },
];

/// Gerador de feedback.
pub struct FeedbackGenerator;

impl FeedbackGenerator {
    /// Deriva positivos, preocupações e exatamente três ações.
    pub fn generate(subs: &SubScores) -> Feedback {
        let mut feedback = Feedback::default();

        for rule in &RULES {
            if (rule.pick)(subs) >= rule.threshold {
                feedback.positives.push(rule.positive.to_string());
            } else {
                if let Some(concern) = rule.concern {
                    feedback.concerns.push(concern.to_string());
                }
                feedback.actions.push(rule.action.to_string());
            }
        }

        feedback.actions = Self::normalize_actions(feedback.actions);

        if feedback.positives.is_empty() {
            feedback.positives.push(FALLBACK_POSITIVE.to_string());
        }
        if feedback.concerns.is_empty() {
            feedback.concerns.push(FALLBACK_CONCERN.to_string());
        }

        feedback
    }

    /// Corta em três ou completa com as ações padrão, sem repetir.
    pub fn normalize_actions(mut actions: Vec<String>) -> Vec<String> {
        actions.truncate(ACTION_COUNT);

        for default in DEFAULT_ACTIONS {
            if actions.len() >= ACTION_COUNT {
                break;
            }
            if !actions.iter().any(|a| a == default) {
                actions.push(default.to_string());
            }
        }

        actions
    }
}

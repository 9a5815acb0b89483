//! Tipos de resposta do Hirelens.

use serde::{Deserialize, Serialize};

/// Resultado de uma avaliação de perfil.
///
/// Imutável depois de construído; é o valor guardado no cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationResult {
    /// Total de repositórios retornados (primeira página).
    pub repos: usize,

    /// Repositórios amostrados com README.
    pub readmes: u32,

    /// Soma de estrelas dos repositórios amostrados.
    pub stars: u64,

    /// Linguagens distintas, ordenadas e separadas por vírgula, ou "N/A".
    pub languages: String,

    /// Nota final (1.0 - 10.0, uma casa decimal).
    pub rating: f64,

    /// Veredito.
    pub verdict: Verdict,

    /// Cor associada ao veredito.
    pub verdict_color: VerdictColor,

    /// Sub-scores (0-100).
    pub subs: SubScores,

    /// Pontos positivos.
    pub positives: Vec<String>,

    /// Preocupações.
    pub concerns: Vec<String>,

    /// Ações recomendadas (sempre 3).
    pub actions: Vec<String>,
}

/// Os cinco sub-scores normalizados.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubScores {
    #[serde(rename = "Documentation")]
    pub documentation: u8,

    #[serde(rename = "Activity")]
    pub activity: u8,

    #[serde(rename = "Organization")]
    pub organization: u8,

    #[serde(rename = "Tech Depth")]
    pub tech_depth: u8,

    #[serde(rename = "Impact")]
    pub impact: u8,
}

impl SubScores {
    /// Pares (rótulo, valor) na ordem de exibição.
    pub fn labeled(&self) -> [(&'static str, u8); 5] {
        [
            ("Documentation", self.documentation),
            ("Activity", self.activity),
            ("Organization", self.organization),
            ("Tech Depth", self.tech_depth),
            ("Impact", self.impact),
        ]
    }
}

/// Veredito final da avaliação.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    /// Pronto para recrutadores.
    #[serde(rename = "Strong Fit")]
    StrongFit,
    /// Tem potencial, mas precisa melhorar.
    #[serde(rename = "Potential (Needs Improvement)")]
    Potential,
    /// Ainda não está pronto.
    #[serde(rename = "Not Recruiter-Ready Yet")]
    NotReady,
}

impl Verdict {
    /// Classifica uma nota (limites inferiores inclusivos).
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 8.0 {
            Verdict::StrongFit
        } else if rating >= 5.0 {
            Verdict::Potential
        } else {
            Verdict::NotReady
        }
    }

    /// Cor associada.
    pub fn color(&self) -> VerdictColor {
        match self {
            Verdict::StrongFit => VerdictColor::Green,
            Verdict::Potential => VerdictColor::Yellow,
            Verdict::NotReady => VerdictColor::Red,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::StrongFit => write!(f, "Strong Fit"),
            Verdict::Potential => write!(f, "Potential (Needs Improvement)"),
            Verdict::NotReady => write!(f, "Not Recruiter-Ready Yet"),
        }
    }
}

/// Cor do veredito.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerdictColor {
    Green,
    Yellow,
    Red,
}

impl std::fmt::Display for VerdictColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerdictColor::Green => write!(f, "green"),
            VerdictColor::Yellow => write!(f, "yellow"),
            VerdictColor::Red => write!(f, "red"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_tiers() {
        assert_eq!(Verdict::from_rating(10.0), Verdict::StrongFit);
        assert_eq!(Verdict::from_rating(8.0), Verdict::StrongFit);
        assert_eq!(Verdict::from_rating(7.9), Verdict::Potential);
        assert_eq!(Verdict::from_rating(5.0), Verdict::Potential);
        assert_eq!(Verdict::from_rating(4.9), Verdict::NotReady);
        assert_eq!(Verdict::from_rating(1.0), Verdict::NotReady);
    }

    #[test]
    fn test_verdict_colors() {
        assert_eq!(Verdict::StrongFit.color(), VerdictColor::Green);
        assert_eq!(Verdict::Potential.color(), VerdictColor::Yellow);
        assert_eq!(Verdict::NotReady.color(), VerdictColor::Red);
    }

    #[test]
    fn test_sub_scores_serialize_with_display_labels() {
        let subs = SubScores {
            documentation: 100,
            activity: 50,
            organization: 0,
            tech_depth: 40,
            impact: 10,
        };

        let json = serde_json::to_value(subs).unwrap();
        assert_eq!(json["Documentation"], 100);
        assert_eq!(json["Tech Depth"], 40);
    }

    #[test]
    fn test_verdict_serializes_as_label() {
        let json = serde_json::to_string(&Verdict::Potential).unwrap();
        assert_eq!(json, "\"Potential (Needs Improvement)\"");
    }
}

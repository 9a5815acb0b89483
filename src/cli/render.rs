//! Formatação do resultado para o terminal.

use crate::types::responses::EvaluationResult;

const BAR_WIDTH: usize = 20;

/// Barra proporcional a um score 0-100.
pub fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Relatório em texto.
pub fn render_text(username: &str, result: &EvaluationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("GitHub profile: {}\n\n", username));
    out.push_str(&format!(
        "Rating: {:.1}/10  {} [{}]\n\n",
        result.rating, result.verdict, result.verdict_color
    ));
    out.push_str(&format!("Repositories: {}\n", result.repos));
    out.push_str(&format!("READMEs:      {}\n", result.readmes));
    out.push_str(&format!("Stars:        {}\n", result.stars));
    out.push_str(&format!("Languages:    {}\n\n", result.languages));

    out.push_str("Scores:\n");
    for (label, score) in result.subs.labeled() {
        out.push_str(&format!("  {:<14} {} {:>3}\n", label, score_bar(score), score));
    }

    push_list(&mut out, "Positives", "✓", &result.positives);
    push_list(&mut out, "Concerns", "⚠", &result.concerns);
    push_list(&mut out, "Next actions", "→", &result.actions);

    out
}

fn push_list(out: &mut String, title: &str, icon: &str, items: &[String]) {
    out.push('\n');
    out.push_str(title);
    out.push_str(":\n");
    for item in items {
        out.push_str(&format!("  {} {}\n", icon, item));
    }
}

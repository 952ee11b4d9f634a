//! Terminal output.

use rendafixa_data::ServiceError;
use rendafixa_data::error::CALCULATE_FALLBACK_MESSAGE;
use rendafixa_domain::GlossaryTerm;
use rendafixa_domain::format::format_currency;
use rendafixa_report::prelude::*;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// Ranked summary: one bar per scenario plus the invested total.
#[must_use]
pub fn summary_text(summary: &Summary<'_>) -> String {
    let mut out = String::new();
    if summary.is_empty() {
        out.push_str("Nenhum cenário retornado.\n");
    }

    let name_width = summary
        .entries
        .iter()
        .map(|e| e.scenario.name.chars().count())
        .max()
        .unwrap_or(0);

    for (position, entry) in summary.entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<name_width$}  {}  {}",
            position + 1,
            entry.scenario.name,
            entry.bar(BAR_WIDTH),
            format_currency(entry.scenario.net_value),
        );
    }
    let _ = writeln!(
        out,
        "\nTotal investido: {}",
        format_currency(summary.total_invested)
    );
    out
}

/// Message for a failed comparison. Input errors are shown as they are.
#[must_use]
pub fn comparison_error(error: &ServiceError) -> String {
    match error {
        ServiceError::Validation(e) => e.to_string(),
        other => format!(
            "Erro ao calcular: {}",
            other.user_message_or(CALCULATE_FALLBACK_MESSAGE)
        ),
    }
}

/// Definition of one term, or the whole glossary.
#[must_use]
pub fn glossary_text(term: Option<GlossaryTerm>) -> String {
    match term {
        Some(term) => format!("{term}\n"),
        None => GlossaryTerm::ALL
            .iter()
            .map(|term| format!("{term}\n"))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

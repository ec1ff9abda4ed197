//! Response formatters and user-facing message texts.
//!
//! Pure functions from API payloads to the Markdown text sent back to the
//! chat. Monetary values render with a `R$ ` prefix and two decimal places.

use myfinance_models::{
    DeletedTransaction, RegisteredTransaction, ReportKind, Summary, TransactionKind,
    TransactionRecord,
};

/// Welcome text shown by `/start`.
pub const WELCOME: &str = concat!(
    "📊 *MyFinance BOT Ativo!*\n\n",
    " *Registrar:*\n",
    "`+100 salario, renda` ou `-50 pizza, lazer`\n",
    " *Consultas:* /resumo, /buscar <termo>, /categorias\n",
    " *Gerenciar:* /desfazer, /addcategoria <nome>, /rmvcategoria <nome>\n",
    " *Relatórios:* /relatorio <mensal|anual|categorias>",
);

/// Sent when the backend refuses a transaction message.
pub const TRANSACTION_REJECTED: &str =
    "❌ Formato inválido! Use: `+/-valor descrição, categoria`";

/// Sent when there is no transaction left to undo.
pub const NOTHING_TO_UNDO: &str = "⚠️ Nenhuma transação encontrada para desfazer.";

/// Sent when the summary endpoint rejects the request.
pub const SUMMARY_FAILED: &str = "❌ Erro ao buscar resumo.";

/// Usage hint for `/buscar` without arguments.
pub const SEARCH_USAGE: &str = "Use: `/buscar <descrição>`";

/// Sent when a search matches nothing.
pub const SEARCH_EMPTY: &str = "🔎 Nenhuma transação encontrada.";

/// Sent when the search endpoint rejects the request.
pub const SEARCH_FAILED: &str = "❌ Erro ao buscar transações.";

/// Sent when the category list endpoint rejects the request.
pub const CATEGORIES_FAILED: &str = "❌ Erro ao buscar categorias.";

/// Usage hint for `/addcategoria` without arguments.
pub const ADD_CATEGORY_USAGE: &str = "Use: `/addcategoria <nome>`";

/// Usage hint for `/rmvcategoria` without arguments.
pub const REMOVE_CATEGORY_USAGE: &str = "Use: `/rmvcategoria <nome>`";

/// Sent when adding a category fails (usually a duplicate).
pub const CATEGORY_ADD_REJECTED: &str = "❌ Erro: Categoria já existe ou falha na API.";

/// Sent when removing an unknown category.
pub const CATEGORY_REMOVE_REJECTED: &str = "❌ Categoria não encontrada.";

/// Usage hint for `/relatorio` without arguments.
pub const REPORT_USAGE: &str = "Use: `/relatorio <mensal|anual|categorias>`";

/// Sent for an unrecognized report kind.
pub const REPORT_INVALID_KIND: &str =
    "❌ Tipo de relatório inválido. Use: `mensal`, `anual` ou `categorias`.";

/// Sent when the report endpoint answers 404.
pub const REPORT_ROUTE_MISSING: &str = "❌ Rota de relatório não encontrada na API.";

/// Generic reply for transport and internal faults.
pub const INTERNAL_ERROR: &str = "⚠️ Erro interno. Tente novamente mais tarde.";

/// Search results are capped to this many lines.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Confirmation for a registered transaction.
pub fn transaction_registered(tx: &RegisteredTransaction) -> String {
    format!(
        "✅ Registrado: *{}*\n💰 Valor: R$ {:.2}",
        tx.description, tx.amount
    )
}

/// Confirmation for an undone transaction.
pub fn transaction_undone(tx: &DeletedTransaction) -> String {
    format!("🗑 *Desfeito:* {} (R$ {:.2})", tx.description, tx.amount)
}

/// Summary card with the requested period capitalized in the header.
pub fn summary(period: &str, summary: &Summary) -> String {
    format!(
        "💰 *Resumo {}*\n\
         ──────────────────\n\
         🟢 Receitas: R$ {:.2}\n\
         🔴 Despesas: R$ {:.2}\n\
         ──────────────────\n\
         ⚖️ Saldo: *R$ {:.2}*",
        capitalize(period),
        summary.incomes,
        summary.expenses,
        summary.balance,
    )
}

/// Search result listing, capped to [`SEARCH_RESULT_LIMIT`] lines.
pub fn search_results(query: &str, records: &[TransactionRecord]) -> String {
    let mut text = format!("🔍 *Resultados para '{query}':*\n\n");
    for record in records.iter().take(SEARCH_RESULT_LIMIT) {
        let marker = match record.kind {
            TransactionKind::Income => "🟢",
            TransactionKind::Expense => "🔴",
        };
        text.push_str(&format!(
            "{marker} {}: {} - *R$ {:.2}*\n",
            record.transaction_date, record.description, record.amount
        ));
    }
    text
}

/// Bullet list of categories. An empty list renders as the bare header.
pub fn category_list(categories: &[String]) -> String {
    let bullets: Vec<String> = categories.iter().map(|c| format!("• {c}")).collect();
    format!("📂 *Suas Categorias:*\n{}", bullets.join("\n"))
}

/// Confirmation for an added category.
pub fn category_added(name: &str) -> String {
    format!("✅ Categoria *{name}* adicionada!")
}

/// Confirmation for a removed category.
pub fn category_removed(name: &str) -> String {
    format!("🗑 Categoria *{name}* removida!")
}

/// Filename for the uploaded report document.
pub fn report_file_name(kind: ReportKind) -> String {
    format!("relatorio_{}.pdf", kind.label())
}

/// Caption shown under the uploaded report document.
pub fn report_caption(kind: ReportKind) -> String {
    format!("📄 Relatório {}", capitalize(kind.label()))
}

/// Report failure message carrying the numeric status code.
pub fn report_failed(status: u16) -> String {
    format!("❌ Falha ao gerar relatório (HTTP {status}).")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        kind: TransactionKind,
        date: &str,
        description: &str,
        amount: f64,
    ) -> TransactionRecord {
        TransactionRecord {
            kind,
            transaction_date: date.to_string(),
            description: description.to_string(),
            amount,
        }
    }

    #[test]
    fn test_amounts_render_with_two_decimals() {
        let tx = RegisteredTransaction {
            description: "pizza".to_string(),
            amount: 50.0,
        };

        let text = transaction_registered(&tx);
        assert!(text.contains("pizza"));
        assert!(text.contains("R$ 50.00"));
    }

    #[test]
    fn test_undo_confirmation_carries_both_fields() {
        let tx = DeletedTransaction {
            description: "cinema".to_string(),
            amount: 32.9,
        };

        let text = transaction_undone(&tx);
        assert!(text.contains("cinema"));
        assert!(text.contains("R$ 32.90"));
    }

    #[test]
    fn test_summary_header_capitalizes_period() {
        let totals = Summary {
            incomes: 1500.0,
            expenses: 320.5,
            balance: 1179.5,
        };

        let text = summary("monthly", &totals);
        assert!(text.contains("Resumo Monthly"));
        assert!(text.contains("Receitas: R$ 1500.00"));
        assert!(text.contains("Despesas: R$ 320.50"));
        assert!(text.contains("Saldo: *R$ 1179.50*"));
    }

    #[test]
    fn test_search_results_cap_at_ten_lines() {
        let records: Vec<TransactionRecord> = (0..25)
            .map(|i| {
                record(
                    TransactionKind::Expense,
                    "2024-01-01",
                    &format!("item {i}"),
                    1.0,
                )
            })
            .collect();

        let text = search_results("item", &records);
        let rendered = text.lines().filter(|l| l.starts_with("🔴")).count();
        assert_eq!(rendered, 10);
    }

    #[test]
    fn test_search_results_mark_direction() {
        let records = vec![
            record(TransactionKind::Income, "2024-03-01", "salario", 3200.0),
            record(TransactionKind::Expense, "2024-03-02", "pizza", 50.0),
        ];

        let text = search_results("a", &records);
        assert!(text.contains("🟢 2024-03-01: salario - *R$ 3200.00*"));
        assert!(text.contains("🔴 2024-03-02: pizza - *R$ 50.00*"));
    }

    #[test]
    fn test_category_list_renders_one_bullet_per_category() {
        let categories = vec!["mercado".to_string(), "lazer".to_string()];
        assert_eq!(
            category_list(&categories),
            "📂 *Suas Categorias:*\n• mercado\n• lazer"
        );
    }

    #[test]
    fn test_empty_category_list_is_the_bare_header() {
        assert_eq!(category_list(&[]), "📂 *Suas Categorias:*\n");
    }

    #[test]
    fn test_report_names_follow_the_kind() {
        assert_eq!(report_file_name(ReportKind::Monthly), "relatorio_mensal.pdf");
        assert_eq!(
            report_file_name(ReportKind::Categories),
            "relatorio_categorias.pdf"
        );
        assert_eq!(report_caption(ReportKind::Annual), "📄 Relatório Anual");
    }

    #[test]
    fn test_report_failure_carries_the_status_code() {
        assert!(report_failed(500).contains("500"));
    }
}

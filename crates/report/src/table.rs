//! Comparison table: one formatted row per scenario, in input order.

use prettytable::{Cell, Row, Table, format};
use rendafixa_domain::ScenarioResult;
use rendafixa_domain::format::{format_currency, format_percentage};

pub const TABLE_HEADERS: [&str; 8] = [
    "Investimento",
    "Valor bruto",
    "Rentab. bruta",
    "Custos",
    "IR",
    "Valor líquido",
    "Rentab. líquida",
    "Ganho líquido",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub gross_value: String,
    pub gross_yield: String,
    pub costs: String,
    pub income_tax: String,
    pub net_value: String,
    pub net_yield: String,
    pub net_gain: String,
}

impl TableRow {
    #[must_use]
    pub fn from_scenario(scenario: &ScenarioResult) -> Self {
        Self {
            name: scenario.name.clone(),
            gross_value: format_currency(scenario.gross_value),
            gross_yield: format_percentage(scenario.gross_yield),
            costs: format_currency(scenario.costs),
            income_tax: format_currency(scenario.income_tax),
            net_value: format_currency(scenario.net_value),
            net_yield: format_percentage(scenario.net_yield),
            net_gain: format_currency(scenario.net_gain),
        }
    }

    #[must_use]
    pub fn cells(&self) -> [&str; 8] {
        [
            &self.name,
            &self.gross_value,
            &self.gross_yield,
            &self.costs,
            &self.income_tax,
            &self.net_value,
            &self.net_yield,
            &self.net_gain,
        ]
    }
}

/// Projects every scenario into a row. No filtering and no re-sorting.
#[must_use]
pub fn table_rows(results: &[ScenarioResult]) -> Vec<TableRow> {
    results.iter().map(TableRow::from_scenario).collect()
}

/// Lays the rows out for terminal display.
#[must_use]
pub fn to_pretty_table(rows: &[TableRow]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(
        TABLE_HEADERS.iter().map(|h| Cell::new(h).style_spec("b")).collect(),
    ));
    for row in rows {
        let mut cells = row.cells().into_iter();
        let mut line = Vec::with_capacity(TABLE_HEADERS.len());
        if let Some(name) = cells.next() {
            line.push(Cell::new(name).style_spec("b"));
        }
        line.extend(cells.map(|value| Cell::new(value).style_spec("r")));
        table.add_row(Row::new(line));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn scenario(name: &str, net_value: Decimal) -> ScenarioResult {
        ScenarioResult {
            name: name.to_string(),
            total_invested: dec!(10000),
            gross_value: dec!(11250.5),
            net_value,
            costs: dec!(12.3),
            income_tax: dec!(187.58),
            net_gain: net_value - dec!(10000),
            gross_yield: dec!(12.505),
            net_yield: dec!(-1.5),
            real_value: None,
            real_gain: None,
            monthly_evolution: None,
        }
    }

    #[test]
    fn test_rows_preserve_order_and_count() {
        let results = vec![
            scenario("Poupança", dec!(10500)),
            scenario("Zero", Decimal::ZERO),
            scenario("CDB", dec!(11050)),
        ];
        let rows = table_rows(&results);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Poupança", "Zero", "CDB"]);
    }

    #[test]
    fn test_row_formatting() {
        let row = TableRow::from_scenario(&scenario("CDB", dec!(11050.62)));
        assert_eq!(row.gross_value, "R$ 11.250,50");
        assert_eq!(row.gross_yield, "12.51%");
        assert_eq!(row.costs, "R$ 12,30");
        assert_eq!(row.income_tax, "R$ 187,58");
        assert_eq!(row.net_value, "R$ 11.050,62");
        assert_eq!(row.net_yield, "-1.50%");
        assert_eq!(row.net_gain, "R$ 1.050,62");
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let rows = table_rows(&[]);
        assert!(rows.is_empty());
        assert!(to_pretty_table(&rows).is_empty());
    }

    #[test]
    fn test_pretty_table_has_one_line_per_row() {
        let rows = table_rows(&[scenario("A", dec!(1)), scenario("B", dec!(2))]);
        let table = to_pretty_table(&rows);
        assert_eq!(table.len(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("Valor líquido"));
        assert!(rendered.contains("R$ 2,00"));
    }
}

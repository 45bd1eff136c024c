use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::{Category, Expense};

#[derive(Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub total: f64,
    pub count: usize,
    pub average: f64,
}

pub fn stats(expenses: &[Expense]) -> Stats {
    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let count = expenses.len();
    let average = if count > 0 { total / count as f64 } else { 0.0 };
    Stats {
        total,
        count,
        average,
    }
}

/// Per-category sums, largest first. Ties fall back to the label so the
/// ordering stays stable across renders.
pub fn category_totals(expenses: &[Expense]) -> Vec<(Category, f64)> {
    let mut totals: HashMap<Category, f64> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert(0.0) += expense.amount;
    }
    let mut totals: Vec<(Category, f64)> = totals.into_iter().collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));
    totals
}

/// Per-month sums keyed "YYYY-MM", newest month first.
pub fn monthly_totals(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for expense in expenses {
        let month = expense.date.get(..7).unwrap_or(&expense.date).to_string();
        *totals.entry(month).or_insert(0.0) += expense.amount;
    }
    let mut totals: Vec<(String, f64)> = totals.into_iter().collect();
    totals.sort_by(|a, b| b.0.cmp(&a.0));
    totals
}

fn parse_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or(NaiveDate::MIN)
}

/// Newest first. Equal dates keep their stored order (stable sort).
pub fn sorted_by_date(expenses: &[Expense]) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));
    sorted
}

pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// "2024-01-01" -> "Jan 1, 2024". Unparsable dates pass through verbatim.
pub fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, amount: f64, category: Category, date: &str) -> Expense {
        Expense {
            id,
            title: format!("expense {}", id),
            amount,
            category,
            date: date.to_string(),
            description: String::new(),
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, 12.50, Category::Food, "2024-01-01"),
            expense(2, 7.50, Category::Food, "2024-01-02"),
        ]
    }

    #[test]
    fn stats_match_the_worked_example() {
        let s = stats(&sample());
        assert_eq!(format_amount(s.total), "$20.00");
        assert_eq!(s.count, 2);
        assert_eq!(format_amount(s.average), "$10.00");
    }

    #[test]
    fn stats_on_empty_list_are_zero() {
        let s = stats(&[]);
        assert_eq!(s.total, 0.0);
        assert_eq!(s.count, 0);
        assert_eq!(s.average, 0.0);
    }

    #[test]
    fn category_totals_sum_to_grand_total() {
        let expenses = vec![
            expense(1, 12.50, Category::Food, "2024-01-01"),
            expense(2, 7.50, Category::Food, "2024-01-02"),
            expense(3, 30.00, Category::Bills, "2024-01-03"),
            expense(4, 5.00, Category::Transport, "2024-01-04"),
        ];
        let totals = category_totals(&expenses);
        let summed: f64 = totals.iter().map(|(_, amount)| amount).sum();
        assert_eq!(summed, stats(&expenses).total);
    }

    #[test]
    fn category_totals_sorted_descending() {
        let expenses = vec![
            expense(1, 5.00, Category::Transport, "2024-01-01"),
            expense(2, 30.00, Category::Bills, "2024-01-02"),
            expense(3, 20.00, Category::Food, "2024-01-03"),
        ];
        let totals = category_totals(&expenses);
        assert_eq!(totals[0].0, Category::Bills);
        assert_eq!(totals[1].0, Category::Food);
        assert_eq!(totals[2].0, Category::Transport);
    }

    #[test]
    fn single_category_total_matches_example() {
        let totals = category_totals(&sample());
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].0, Category::Food);
        assert_eq!(format_amount(totals[0].1), "$20.00");
    }

    #[test]
    fn sort_places_newest_date_first() {
        let expenses = vec![
            expense(1, 1.0, Category::Food, "2024-01-01"),
            expense(2, 1.0, Category::Food, "2024-03-01"),
        ];
        let sorted = sorted_by_date(&expenses);
        assert_eq!(sorted[0].date, "2024-03-01");
        assert_eq!(sorted[1].date, "2024-01-01");
    }

    #[test]
    fn unparsable_dates_sort_last() {
        let expenses = vec![
            expense(1, 1.0, Category::Food, "not-a-date"),
            expense(2, 1.0, Category::Food, "2024-01-01"),
        ];
        let sorted = sorted_by_date(&expenses);
        assert_eq!(sorted[0].id, 2);
    }

    #[test]
    fn monthly_totals_group_by_month_newest_first() {
        let expenses = vec![
            expense(1, 10.0, Category::Food, "2024-01-05"),
            expense(2, 15.0, Category::Bills, "2024-01-20"),
            expense(3, 40.0, Category::Health, "2024-03-02"),
        ];
        let totals = monthly_totals(&expenses);
        assert_eq!(totals[0], ("2024-03".to_string(), 40.0));
        assert_eq!(totals[1], ("2024-01".to_string(), 25.0));
    }

    #[test]
    fn amount_formats_to_two_decimals() {
        assert_eq!(format_amount(7.5), "$7.50");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(1234.567), "$1234.57");
    }

    #[test]
    fn date_formats_as_abbreviated_month() {
        assert_eq!(format_date("2024-01-01"), "Jan 1, 2024");
        assert_eq!(format_date("2023-11-28"), "Nov 28, 2023");
    }

    #[test]
    fn bad_date_passes_through() {
        assert_eq!(format_date("soon"), "soon");
    }
}

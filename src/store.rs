use std::rc::Rc;

use yew::Reducible;

use crate::model::Expense;

/// In-memory snapshot of the server's expense list for this session. All
/// writes go through [`StoreAction`]; the list is discarded on reload.
#[derive(Clone, PartialEq, Default)]
pub struct ExpenseStore {
    pub expenses: Vec<Expense>,
}

pub enum StoreAction {
    /// Wholesale replacement after a load.
    Replace(Vec<Expense>),
    /// Append the server-returned record after a successful create.
    Insert(Expense),
    /// Swap in the server-returned record after a successful edit.
    Update(Expense),
    /// Drop the record after a successful delete.
    Remove(i64),
}

impl Reducible for ExpenseStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut expenses = self.expenses.clone();
        match action {
            StoreAction::Replace(list) => expenses = list,
            StoreAction::Insert(expense) => expenses.push(expense),
            StoreAction::Update(expense) => {
                if let Some(slot) = expenses.iter_mut().find(|e| e.id == expense.id) {
                    *slot = expense;
                }
            }
            StoreAction::Remove(id) => expenses.retain(|e| e.id != id),
        }
        Rc::new(ExpenseStore { expenses })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn expense(id: i64, amount: f64) -> Expense {
        Expense {
            id,
            title: format!("expense {}", id),
            amount,
            category: Category::Food,
            date: "2024-01-01".to_string(),
            description: String::new(),
        }
    }

    fn reduce(store: ExpenseStore, action: StoreAction) -> ExpenseStore {
        (*Rc::new(store).reduce(action)).clone()
    }

    #[test]
    fn replace_is_wholesale() {
        let store = reduce(
            ExpenseStore {
                expenses: vec![expense(1, 5.0)],
            },
            StoreAction::Replace(vec![expense(2, 7.0), expense(3, 9.0)]),
        );
        assert_eq!(store.expenses.len(), 2);
        assert!(store.expenses.iter().all(|e| e.id != 1));
    }

    #[test]
    fn insert_appends_exactly_once() {
        let store = reduce(
            ExpenseStore {
                expenses: vec![expense(1, 5.0)],
            },
            StoreAction::Insert(expense(2, 7.0)),
        );
        assert_eq!(
            store.expenses.iter().filter(|e| e.id == 2).count(),
            1
        );
        assert_eq!(store.expenses.len(), 2);
    }

    #[test]
    fn remove_drops_the_matching_id() {
        let store = reduce(
            ExpenseStore {
                expenses: vec![expense(1, 5.0), expense(2, 7.0)],
            },
            StoreAction::Remove(1),
        );
        assert!(store.expenses.iter().all(|e| e.id != 1));
        assert_eq!(store.expenses.len(), 1);
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        let store = reduce(
            ExpenseStore {
                expenses: vec![expense(1, 5.0)],
            },
            StoreAction::Remove(42),
        );
        assert_eq!(store.expenses.len(), 1);
    }

    #[test]
    fn update_swaps_in_place() {
        let mut edited = expense(2, 99.0);
        edited.title = "edited".to_string();
        let store = reduce(
            ExpenseStore {
                expenses: vec![expense(1, 5.0), expense(2, 7.0)],
            },
            StoreAction::Update(edited),
        );
        assert_eq!(store.expenses.len(), 2);
        let found = store.expenses.iter().find(|e| e.id == 2).unwrap();
        assert_eq!(found.title, "edited");
        assert_eq!(found.amount, 99.0);
    }
}

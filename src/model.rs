use serde::{Deserialize, Serialize};

/// A single spending entry. Owned by the server; the client keeps a cached
/// copy for the current session only.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for creating or updating an expense. The server assigns ids.
#[derive(Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: String,
    pub description: String,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Fixed category set. Labels outside the set deserialize to `Other` and
/// render its default icon.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Transport => "🚗",
            Category::Shopping => "🛍️",
            Category::Entertainment => "🎬",
            Category::Bills => "💡",
            Category::Health => "🏥",
            Category::Other => "📦",
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Food" => Category::Food,
            "Transport" => Category::Transport,
            "Shopping" => Category::Shopping,
            "Entertainment" => Category::Entertainment,
            "Bills" => Category::Bills,
            "Health" => Category::Health,
            _ => Category::Other,
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_string()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse semantic classification of a column's role.
///
/// Categories are assigned by ordered rules over the column's key flags,
/// name, and declared type; key flags always win, so a primary-key column
/// named `CreatedDate` is an [`Category::Identifier`], not
/// [`Category::Datetime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Primary-key columns (CustomerID, OrderID).
    Identifier,
    /// Foreign-key columns pointing at another table.
    Reference,
    /// Date or time values (OrderDate, CreatedDate, timestamps).
    Datetime,
    /// Monetary amounts (UnitPrice, TotalAmount).
    Money,
    /// Counts and quantities (StockQuantity, ItemCount).
    Quantity,
    /// Other numeric values.
    Numeric,
    /// Yes/no flags (IsActive, HasDiscount, bit/bool columns).
    Boolean,
    /// Email addresses.
    Email,
    /// Phone numbers.
    Phone,
    /// Postal addresses and their parts (Street, City, Zip).
    Address,
    /// Names, titles, and labels.
    Name,
    /// Free-text descriptions, notes, and comments.
    Description,
    /// Other text values.
    Text,
    /// Everything the rules above do not cover.
    General,
}

impl Category {
    /// Canonical lowercase tag used in mapping documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Identifier => "identifier",
            Category::Reference => "reference",
            Category::Datetime => "datetime",
            Category::Money => "money",
            Category::Quantity => "quantity",
            Category::Numeric => "numeric",
            Category::Boolean => "boolean",
            Category::Email => "email",
            Category::Phone => "phone",
            Category::Address => "address",
            Category::Name => "name",
            Category::Description => "description",
            Category::Text => "text",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "identifier" => Ok(Category::Identifier),
            "reference" => Ok(Category::Reference),
            "datetime" => Ok(Category::Datetime),
            "money" => Ok(Category::Money),
            "quantity" => Ok(Category::Quantity),
            "numeric" => Ok(Category::Numeric),
            "boolean" => Ok(Category::Boolean),
            "email" => Ok(Category::Email),
            "phone" => Ok(Category::Phone),
            "address" => Ok(Category::Address),
            "name" => Ok(Category::Name),
            "description" => Ok(Category::Description),
            "text" => Ok(Category::Text),
            "general" => Ok(Category::General),
            _ => Err(format!("unknown category: {s}")),
        }
    }
}

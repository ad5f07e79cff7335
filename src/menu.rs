//! Menu
//!
//! The read-only catalog the order screen adds items from.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while building or querying a menu.
#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    /// A menu item was given a negative unit price (item id, price).
    #[error("Menu item {0} has negative unit price {1}")]
    NegativePrice(MenuItemId, Decimal),

    /// A menu item was given a unit price above [`MenuItem::MAX_UNIT_PRICE`] (item id, price).
    #[error("Menu item {0} has unit price {1}, above the maximum of {max}", max = MenuItem::MAX_UNIT_PRICE)]
    PriceTooLarge(MenuItemId, Decimal),

    /// Two menu items share the same id.
    #[error("Menu item {0} is defined more than once")]
    DuplicateItem(MenuItemId),

    /// The requested item is not on the menu.
    #[error("Menu item {0} not found")]
    UnknownItem(MenuItemId),

    /// A category name could not be recognised.
    #[error("Unknown menu category: {0}")]
    UnknownCategory(String),
}

/// Stable catalog identifier of a menu item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(u32);

impl MenuItemId {
    /// Creates a new menu item id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MenuItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Menu category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Burgers, pizza and the like.
    #[serde(alias = "fastfood")]
    FastFood,

    /// Ice cream and other sweets.
    #[serde(alias = "desert")]
    Dessert,

    /// Soft drinks.
    Drinks,
}

impl Category {
    /// Display label used on menus and receipts.
    pub fn label(self) -> &'static str {
        match self {
            Category::FastFood => "Fast Food",
            Category::Dessert => "Dessert",
            Category::Drinks => "Drinks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .map(|ch| ch.to_ascii_lowercase())
            .collect();

        match normalised.as_str() {
            "fastfood" => Ok(Category::FastFood),
            "dessert" | "desert" => Ok(Category::Dessert),
            "drinks" | "drink" => Ok(Category::Drinks),
            _ => Err(MenuError::UnknownCategory(s.to_string())),
        }
    }
}

/// Which part of the menu to show.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every item.
    #[default]
    All,

    /// Items of a single category.
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if the item passes this filter.
    pub fn matches(self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// A single orderable menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    id: MenuItemId,
    name: String,
    unit_price: Decimal,
    category: Category,
}

impl MenuItem {
    /// Highest accepted unit price.
    ///
    /// A full cart (one line per possible id, each at `u32::MAX` units) stays
    /// below `Decimal::MAX` through discount and tax at this bound.
    pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    /// Creates a menu item.
    ///
    /// # Errors
    ///
    /// - [`MenuError::NegativePrice`]: `unit_price` is below zero.
    /// - [`MenuError::PriceTooLarge`]: `unit_price` is above [`MenuItem::MAX_UNIT_PRICE`].
    pub fn new(
        id: MenuItemId,
        name: impl Into<String>,
        unit_price: Decimal,
        category: Category,
    ) -> Result<Self, MenuError> {
        if unit_price < Decimal::ZERO {
            return Err(MenuError::NegativePrice(id, unit_price));
        }

        if unit_price > Self::MAX_UNIT_PRICE {
            return Err(MenuError::PriceTooLarge(id, unit_price));
        }

        Ok(Self {
            id,
            name: name.into(),
            unit_price,
            category,
        })
    }

    /// Catalog id
    pub fn id(&self) -> MenuItemId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of one unit
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Category
    pub fn category(&self) -> Category {
        self.category
    }
}

/// The restaurant menu, in catalog order.
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
    index: FxHashMap<MenuItemId, usize>,
    currency: &'static Currency,
}

impl Menu {
    /// Create a menu from the given items.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::DuplicateItem`] if two items share an id.
    pub fn new(
        items: impl Into<Vec<MenuItem>>,
        currency: &'static Currency,
    ) -> Result<Self, MenuError> {
        let items = items.into();
        let mut index = FxHashMap::default();

        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id, position).is_some() {
                return Err(MenuError::DuplicateItem(item.id));
            }
        }

        Ok(Self {
            items,
            index,
            currency,
        })
    }

    /// Look up an item by id.
    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.index
            .get(&id)
            .and_then(|position| self.items.get(*position))
    }

    /// Look up an item by id, failing if it is not on the menu.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::UnknownItem`] if the id is not in the catalog.
    pub fn require(&self, id: MenuItemId) -> Result<&MenuItem, MenuError> {
        self.get(id).ok_or(MenuError::UnknownItem(id))
    }

    /// Iterate over the items that pass `filter`, in catalog order.
    pub fn filter(&self, filter: impl Into<CategoryFilter>) -> impl Iterator<Item = &MenuItem> {
        let filter = filter.into();

        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Iterate over every item on the menu.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    /// Number of items on the menu.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the menu is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency all menu prices are expressed in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

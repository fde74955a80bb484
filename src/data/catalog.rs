use super::{Category, Product, User};
use crate::state::Filters;
use std::collections::HashMap;
use std::rc::Rc;

/// A product with its category and category-owner resolved.
#[derive(Clone, PartialEq, Debug)]
pub struct CatalogEntry {
	pub id: u32,
	pub name: String,
	pub category: Rc<Category>,
	pub owner: Rc<User>,
}

impl CatalogEntry {
	pub fn category_label(&self) -> String {
		format!("{} - {}", self.category.icon, self.category.title)
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
	#[error("product {product_id} references unknown category {category_id}")]
	UnknownCategory { product_id: u32, category_id: u32 },
	#[error("category {category_id} references unknown owner {owner_id}")]
	UnknownOwner { category_id: u32, owner_id: u32 },
}

/// The fully linked dataset. Built once at startup and never mutated;
/// filtering only derives subsets of `entries`.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Catalog {
	users: Vec<Rc<User>>,
	categories: Vec<Rc<Category>>,
	entries: Vec<Rc<CatalogEntry>>,
}

impl Catalog {
	pub fn link(users: &[User], categories: &[Category], products: &[Product]) -> Result<Self, LinkError> {
		let users = users.iter().cloned().map(Rc::new).collect::<Vec<_>>();
		let categories = categories.iter().cloned().map(Rc::new).collect::<Vec<_>>();

		// First record wins when ids collide.
		let mut users_by_id = HashMap::with_capacity(users.len());
		for user in &users {
			users_by_id.entry(user.id).or_insert_with(|| Rc::clone(user));
		}
		let mut categories_by_id = HashMap::with_capacity(categories.len());
		for category in &categories {
			categories_by_id.entry(category.id).or_insert_with(|| Rc::clone(category));
		}

		let mut entries = Vec::with_capacity(products.len());
		for product in products {
			let category = categories_by_id
				.get(&product.category_id)
				.ok_or(LinkError::UnknownCategory {
					product_id: product.id,
					category_id: product.category_id,
				})?;
			let owner = users_by_id.get(&category.owner_id).ok_or(LinkError::UnknownOwner {
				category_id: category.id,
				owner_id: category.owner_id,
			})?;
			entries.push(Rc::new(CatalogEntry {
				id: product.id,
				name: product.name.clone(),
				category: Rc::clone(category),
				owner: Rc::clone(owner),
			}));
		}

		Ok(Self {
			users,
			categories,
			entries,
		})
	}

	pub fn users(&self) -> &[Rc<User>] {
		&self.users
	}

	pub fn categories(&self) -> &[Rc<Category>] {
		&self.categories
	}

	pub fn entries(&self) -> &[Rc<CatalogEntry>] {
		&self.entries
	}

	/// The entries to render for the current filters: the owner-restricted
	/// working collection, narrowed by the text query. Entry order always
	/// matches the linked dataset.
	pub fn visible(&self, filters: &Filters) -> Vec<Rc<CatalogEntry>> {
		self.entries
			.iter()
			.filter(|entry| filters.owner.matches(&entry.owner.name))
			.filter(|entry| filters.matches_name(&entry.name))
			.cloned()
			.collect()
	}
}

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Category {
	pub id: u32,
	pub title: String,
	pub icon: String,
	/// The user who owns every product in this category.
	pub owner_id: u32,
}

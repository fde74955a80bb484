use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Product {
	pub id: u32,
	pub name: String,
	pub category_id: u32,
}

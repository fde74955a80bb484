use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct User {
	pub id: u32,
	pub name: String,
	pub sex: Sex,
}

/// Serialized as the single letters the dataset uses.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Sex {
	#[serde(rename = "m")]
	Male,
	#[serde(rename = "f")]
	Female,
}

impl Sex {
	/// Bulma text-color class used when rendering an owner's name.
	pub fn text_class(&self) -> &'static str {
		match self {
			Self::Male => "has-text-link",
			Self::Female => "has-text-danger",
		}
	}
}

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum OwnerFilter {
	#[default]
	All,
	Named(String),
}

impl OwnerFilter {
	pub fn matches(&self, owner_name: &str) -> bool {
		match self {
			Self::All => true,
			Self::Named(name) => name == owner_name,
		}
	}

	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}

	pub fn is_named(&self, owner_name: &str) -> bool {
		match self {
			Self::All => false,
			Self::Named(name) => name == owner_name,
		}
	}
}

/// The whole of the page's mutable state: which owner tab is active and
/// what has been typed into the search box.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Filters {
	pub owner: OwnerFilter,
	pub query: String,
}

impl Filters {
	/// Case-insensitive substring match of the query against a product
	/// name. An empty query matches every name.
	pub fn matches_name(&self, name: &str) -> bool {
		name.to_lowercase().contains(&self.query.to_lowercase())
	}
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Action {
	SelectAllOwners,
	SelectOwner(String),
	SetQuery(String),
	ClearQuery,
	ResetAll,
}

impl Reducible for Filters {
	type Action = Action;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut next = (*self).clone();
		match action {
			Action::SelectAllOwners => next.owner = OwnerFilter::All,
			Action::SelectOwner(name) => next.owner = OwnerFilter::Named(name),
			Action::SetQuery(value) => next.query = value,
			Action::ClearQuery => next.query.clear(),
			Action::ResetAll => next = Self::default(),
		}
		log::debug!("{next:?}");
		match next != *self {
			true => Rc::new(next),
			false => self,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn apply(filters: Filters, action: Action) -> Rc<Filters> {
		Rc::new(filters).reduce(action)
	}

	#[test]
	fn select_owner_replaces_the_owner_restriction() {
		let state = apply(Filters::default(), Action::SelectOwner("Max".into()));
		assert_eq!(state.owner, OwnerFilter::Named("Max".into()));
		assert_eq!(state.query, "");
	}

	#[test]
	fn select_all_restores_the_full_collection_regardless_of_history() {
		let state = apply(Filters::default(), Action::SelectOwner("Anna".into()));
		let state = apply((*state).clone(), Action::SetQuery("apple".into()));
		let state = apply((*state).clone(), Action::SelectAllOwners);
		assert!(state.owner.is_all());
		// The query survives an owner change; only reset clears it.
		assert_eq!(state.query, "apple");
	}

	#[test]
	fn reselecting_the_active_state_returns_the_same_allocation() {
		let state = Rc::new(Filters::default());
		let next = state.clone().reduce(Action::SelectAllOwners);
		assert!(Rc::ptr_eq(&state, &next));
	}

	#[test]
	fn clear_query_leaves_the_owner_untouched() {
		let state = Filters {
			owner: OwnerFilter::Named("Roma".into()),
			query: "milk".into(),
		};
		let state = apply(state, Action::ClearQuery);
		assert_eq!(state.owner, OwnerFilter::Named("Roma".into()));
		assert_eq!(state.query, "");
	}

	#[test]
	fn reset_returns_to_defaults() {
		let state = Filters {
			owner: OwnerFilter::Named("Roma".into()),
			query: "milk".into(),
		};
		let state = apply(state, Action::ResetAll);
		assert_eq!(*state, Filters::default());
	}

	#[test]
	fn query_matching_is_case_insensitive() {
		let filters = Filters {
			owner: OwnerFilter::All,
			query: "MILK".into(),
		};
		assert!(filters.matches_name("Milk"));
		assert!(!filters.matches_name("Bread"));
	}

	#[test]
	fn empty_query_matches_everything() {
		let filters = Filters::default();
		assert!(filters.matches_name("Milk"));
		assert!(filters.matches_name(""));
	}

	#[test]
	fn owner_name_comparison_is_exact() {
		let owner = OwnerFilter::Named("Max".into());
		assert!(owner.matches("Max"));
		assert!(!owner.matches("max"));
		assert!(!owner.matches("Maxim"));
	}

	#[test]
	fn filters_round_trip_through_serde() {
		let filters = Filters {
			owner: OwnerFilter::Named("Anna".into()),
			query: "apple".into(),
		};
		let json = serde_json::to_string(&filters).unwrap();
		assert_eq!(serde_json::from_str::<Filters>(&json).unwrap(), filters);
	}
}

use crate::data::Category;

lazy_static::lazy_static! {
	pub static ref CATEGORIES: Vec<Category> = vec![
		Category { id: 1, title: "Grocery".into(), icon: "🍞".into(), owner_id: 2 },
		Category { id: 2, title: "Drinks".into(), icon: "🍺".into(), owner_id: 1 },
		Category { id: 3, title: "Fruits".into(), icon: "🍏".into(), owner_id: 2 },
		Category { id: 4, title: "Electronics".into(), icon: "💻".into(), owner_id: 3 },
		Category { id: 5, title: "Clothes".into(), icon: "👚".into(), owner_id: 4 },
	];
}

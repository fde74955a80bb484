use crate::data::Product;

lazy_static::lazy_static! {
	pub static ref PRODUCTS: Vec<Product> = vec![
		Product { id: 1, name: "Milk".into(), category_id: 2 },
		Product { id: 2, name: "Bread".into(), category_id: 1 },
		Product { id: 3, name: "Garlic".into(), category_id: 1 },
		Product { id: 4, name: "Cheese".into(), category_id: 1 },
		Product { id: 5, name: "Apple".into(), category_id: 3 },
		Product { id: 6, name: "Banana".into(), category_id: 3 },
		Product { id: 7, name: "Orange".into(), category_id: 3 },
		Product { id: 8, name: "Laptop".into(), category_id: 4 },
		Product { id: 9, name: "Keyboard".into(), category_id: 4 },
		Product { id: 10, name: "Mouse".into(), category_id: 4 },
		Product { id: 11, name: "T-shirt".into(), category_id: 5 },
		Product { id: 12, name: "Jeans".into(), category_id: 5 },
	];
}

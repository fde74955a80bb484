use crate::data::{Sex, User};

lazy_static::lazy_static! {
	pub static ref USERS: Vec<User> = vec![
		User { id: 1, name: "Roma".into(), sex: Sex::Male },
		User { id: 2, name: "Anna".into(), sex: Sex::Female },
		User { id: 3, name: "Max".into(), sex: Sex::Male },
		User { id: 4, name: "John".into(), sex: Sex::Male },
	];
}

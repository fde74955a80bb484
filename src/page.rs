use crate::{
	api,
	components::{FilterPanel, ProductTable},
	data::Catalog,
	state::{Action, Filters},
};
use yew::prelude::*;

#[function_component]
pub fn Page() -> Html {
	let catalog = use_memo((), |_| {
		Catalog::link(&api::users::USERS, &api::categories::CATEGORIES, &api::products::PRODUCTS)
	});
	let filters = use_reducer_eq(Filters::default);
	let on_action = {
		let filters = filters.clone();
		Callback::from(move |action: Action| filters.dispatch(action))
	};

	let catalog = match &*catalog {
		Ok(catalog) => catalog,
		Err(err) => {
			// Unrecoverable: the fixtures are fixed at build time.
			log::error!("failed to link catalog data: {err}");
			return html! {
				<div class="section">
					<div class="notification is-danger">
						{format!("Failed to load the catalog: {err}")}
					</div>
				</div>
			};
		}
	};
	let visible = catalog.visible(&filters);

	html! {
		<div class="section">
			<div class="container">
				<h1 class="title">{"Product Categories"}</h1>

				<div class="block">
					<FilterPanel
						users={catalog.users().to_vec()}
						categories={catalog.categories().to_vec()}
						filters={(*filters).clone()}
						{on_action}
					/>
				</div>

				<div class="box table-container">
					<ProductTable entries={visible} />
				</div>
			</div>
		</div>
	}
}

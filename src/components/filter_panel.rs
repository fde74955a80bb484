use crate::{
	data::{Category, User},
	state::{Action, Filters},
};
use std::rc::Rc;
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct FilterPanelProps {
	pub users: Vec<Rc<User>>,
	pub categories: Vec<Rc<Category>>,
	pub filters: Filters,
	pub on_action: Callback<Action>,
}

#[function_component]
pub fn FilterPanel(
	FilterPanelProps {
		users,
		categories,
		filters,
		on_action,
	}: &FilterPanelProps,
) -> Html {
	let select_all = on_action.reform(|_: MouseEvent| Action::SelectAllOwners);
	let clear_query = on_action.reform(|_: MouseEvent| Action::ClearQuery);
	let reset_all = on_action.reform(|_: MouseEvent| Action::ResetAll);
	let set_query = {
		let on_action = on_action.clone();
		Callback::from(move |ev: InputEvent| {
			let input: web_sys::HtmlInputElement =
				ev.target_dyn_into().expect_throw("search field should be an input");
			on_action.emit(Action::SetQuery(input.value()));
		})
	};

	let all_tab_classes = {
		let mut classes = classes! {};
		if filters.owner.is_all() {
			classes.push("is-active");
		}
		classes
	};
	let owner_tabs = users
		.iter()
		.map(|user| {
			let onclick = on_action.reform({
				let name = user.name.clone();
				move |_: MouseEvent| Action::SelectOwner(name.clone())
			});
			let mut classes = classes! {};
			if filters.owner.is_named(&user.name) {
				classes.push("is-active");
			}
			html! {
				<a key={user.id.to_string()} data-cy="FilterUser" href="#/" class={classes} {onclick}>
					{&user.name}
				</a>
			}
		})
		.collect::<Vec<_>>();

	// The category buttons are not wired to any filtering; they only
	// advertise which categories exist.
	let category_buttons = categories
		.iter()
		.map(|category| {
			html! {
				<a key={category.id.to_string()} data-cy="Category" href="#/" class="button mr-2 my-1 is-info">
					{&category.title}
				</a>
			}
		})
		.collect::<Vec<_>>();

	html! {
		<nav class="panel">
			<p class="panel-heading">{"Filters"}</p>

			<p class="panel-tabs has-text-weight-bold">
				<a data-cy="FilterAllUsers" href="#/" class={all_tab_classes} onclick={select_all}>
					{"All"}
				</a>
				{owner_tabs}
			</p>

			<div class="panel-block">
				<p class="control has-icons-left has-icons-right">
					<input
						data-cy="SearchField"
						type="text"
						class="input"
						placeholder="Search"
						value={filters.query.clone()}
						oninput={set_query}
					/>
					<span class="icon is-left">
						<i class="fas fa-search" aria-hidden="true" />
					</span>
					{(!filters.query.is_empty()).then(|| html! {
						<span class="icon is-right">
							<button data-cy="ClearButton" type="button" class="delete" onclick={clear_query} />
						</span>
					})}
				</p>
			</div>

			<div class="panel-block is-flex-wrap-wrap">
				<a href="#/" data-cy="AllCategories" class="button mr-6 outlined is-success">
					{"All"}
				</a>
				{category_buttons}
			</div>

			<div class="panel-block">
				<a data-cy="ResetAllButton" href="#/" class="button is-link is-outlined is-fullwidth" onclick={reset_all}>
					{"Reset all filters"}
				</a>
			</div>
		</nav>
	}
}

use crate::data::CatalogEntry;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ProductTableProps {
	pub entries: Vec<Rc<CatalogEntry>>,
}

#[function_component]
pub fn ProductTable(ProductTableProps { entries }: &ProductTableProps) -> Html {
	if entries.is_empty() {
		return html! {
			<p data-cy="NoMatchingMessage">{"No products matching selected criteria"}</p>
		};
	}

	html! {
		<table data-cy="ProductTable" class="table is-striped is-narrow is-fullwidth">
			<thead>
				<tr>
					{column_heading("ID", "fa-sort")}
					{column_heading("Product", "fa-sort-down")}
					{column_heading("Category", "fa-sort-up")}
					{column_heading("User", "fa-sort")}
				</tr>
			</thead>
			<tbody>
				{entries.iter().map(|entry| html! {
					<tr key={entry.id.to_string()} data-cy="Product">
						<td class="has-text-weight-bold" data-cy="ProductId">{entry.id}</td>
						<td data-cy="ProductName">{&entry.name}</td>
						<td data-cy="ProductCategory">{entry.category_label()}</td>
						<td data-cy="ProductUser" class={entry.owner.sex.text_class()}>
							{&entry.owner.name}
						</td>
					</tr>
				}).collect::<Vec<_>>()}
			</tbody>
		</table>
	}
}

// The sort affordances carry no comparator; every column renders its icon
// in a fixed state.
fn column_heading(label: &str, sort_icon: &'static str) -> Html {
	html! {
		<th>
			<span class="is-flex is-flex-wrap-nowrap">
				{label.to_owned()}
				<a href="#/">
					<span class="icon">
						<i data-cy="SortIcon" class={classes!("fas", sort_icon)} />
					</span>
				</a>
			</span>
		</th>
	}
}

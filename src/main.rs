mod api;
mod components;
mod data;
mod page;
mod state;

fn main() {
	wasm_logger::init(wasm_logger::Config::default());
	yew::Renderer::<page::Page>::new().render();
}

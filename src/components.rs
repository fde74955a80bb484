mod filter_panel;
pub use filter_panel::*;

mod product_table;
pub use product_table::*;

pub mod component;
pub mod hint_bar;
pub mod nav_list;

pub(crate) use component::{Component, find_target_index_by_mouse_position};
pub use hint_bar::HintBarComponent;
pub use nav_list::{NavListComponent, NavListState};

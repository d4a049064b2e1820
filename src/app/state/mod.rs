//! Application State: zentrale Datenhaltung der Editor-Session.

mod app_state;
mod flow;
mod items_tree;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use flow::{FlowAction, FlowHistory};
pub use items_tree::{ItemsTree, TreeNode};
pub use selection::{SelectionRect, SelectionState};
pub use ui::{ContextMenuRequest, MenuVariant, UiState};
pub use view::{Marquee, ViewState};

pub mod list_view;
pub mod row_view;

use crate::models::countdown::CountdownId;

/// What the user asked for while the list was drawn this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Add,
    Edit(CountdownId),
    Delete(CountdownId),
}

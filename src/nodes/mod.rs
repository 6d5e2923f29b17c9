//! High-level node operations.
//!
//! Every operation comes in four variants: `op` and `op_detailed` are
//! async, `op_blocking` and `op_blocking_detailed` block the calling
//! thread. The plain variants return the parsed model or fail with
//! [`Error::Failed`](crate::Error::Failed); the detailed ones return the
//! status, headers and raw content alongside an optional parsed model.
//! Requests are validated before anything is sent.

pub mod models;

mod associations;
mod copy_node;
mod create_node;
mod delete_node;
mod get_node;
mod list_children;
mod list_parents;
mod lock_node;
mod move_node;
mod secondary_children;
mod update_node;

pub use associations::{
    create_association, create_association_blocking, create_association_blocking_detailed,
    create_association_detailed, list_target_associations, list_target_associations_blocking,
    list_target_associations_blocking_detailed, list_target_associations_detailed,
};
pub use copy_node::{copy_node, copy_node_blocking, copy_node_blocking_detailed, copy_node_detailed};
pub use create_node::{
    create_folder, create_folder_blocking, create_folder_blocking_detailed,
    create_folder_detailed, create_node, create_node_blocking, create_node_blocking_detailed,
    create_node_detailed, create_node_with_content, create_node_with_content_blocking,
    create_node_with_content_blocking_detailed, create_node_with_content_detailed,
};
pub use delete_node::{
    delete_node, delete_node_blocking, delete_node_blocking_detailed, delete_node_detailed,
};
pub use get_node::{get_node, get_node_blocking, get_node_blocking_detailed, get_node_detailed};
pub use list_children::{
    list_children, list_children_blocking, list_children_blocking_detailed,
    list_children_detailed,
};
pub use list_parents::{
    list_parents, list_parents_blocking, list_parents_blocking_detailed, list_parents_detailed,
};
pub use lock_node::{
    lock_node, lock_node_blocking, lock_node_blocking_detailed, lock_node_detailed, unlock_node,
    unlock_node_blocking, unlock_node_blocking_detailed, unlock_node_detailed,
};
pub use move_node::{move_node, move_node_blocking, move_node_blocking_detailed, move_node_detailed};
pub use secondary_children::{
    create_secondary_child, create_secondary_child_blocking,
    create_secondary_child_blocking_detailed, create_secondary_child_detailed,
    delete_secondary_child, delete_secondary_child_blocking,
    delete_secondary_child_blocking_detailed, delete_secondary_child_detailed,
    list_secondary_children, list_secondary_children_blocking,
    list_secondary_children_blocking_detailed, list_secondary_children_detailed,
};
pub use update_node::{
    update_node, update_node_blocking, update_node_blocking_detailed, update_node_content,
    update_node_content_blocking, update_node_content_blocking_detailed,
    update_node_content_detailed, update_node_detailed,
};

use alfresco_raw::Maybe;

use crate::error::{Error, Result};

pub(crate) fn require_id(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn maybe<T: Clone>(value: &Option<T>) -> Maybe<T> {
    Maybe::from_option(value.clone())
}

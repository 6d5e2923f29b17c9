//! Core API node endpoints under `/nodes`.

pub mod copy_node;
pub mod create_association;
pub mod create_node;
pub mod create_secondary_child_association;
pub mod delete_node;
pub mod delete_secondary_child_association;
pub mod get_node;
pub mod list_node_children;
pub mod list_parents;
pub mod list_secondary_children;
pub mod list_target_associations;
pub mod lock_node;
pub mod move_node;
pub mod unlock_node;
pub mod update_node;
pub mod update_node_content;

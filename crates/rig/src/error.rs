//! Errors raised while building, loading or querying a skeleton.

use thiserror::Error;

use crate::node::NodeId;

/// Errors that can occur when assembling a skeleton.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkeletonError {
    #[error("node '{child}' references parent {parent:?}, which has not been added yet")]
    UnknownParent { child: String, parent: NodeId },

    #[error("a node named '{0}' already exists")]
    DuplicateName(String),

    #[error("no node named '{0}'")]
    NotFound(String),
}

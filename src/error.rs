//! Errors produced by the contact book.

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// Why a record could not be added to the tree.
#[derive(Debug, Error)]
pub enum InsertError {
    /// A contact with this name is already stored. The candidate record was
    /// dropped and the tree is unchanged.
    #[error("contact `{name}` already exists")]
    DuplicateKey {
        /// The name that collided.
        name: String,
    },

    /// Storage for the record could not be reserved.
    #[error("could not allocate contact storage: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Problems with a line typed into the menu. None of these end the session.
#[derive(Debug, Error)]
pub enum InputError {
    /// The name field was blank after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The menu choice was not one of the listed options.
    #[error("invalid option `{0}`")]
    InvalidChoice(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for menu operations.
pub type Result<T> = std::result::Result<T, InputError>;

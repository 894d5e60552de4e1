//! The payload stored in each node of a [`ContactTree`][crate::tree::ContactTree].

use std::cmp::Ordering;
use std::fmt;

use crate::error::InsertError;

/// Compares two names byte by byte.
///
/// This is the only ordering the tree uses. There is no case folding and no
/// locale awareness so `"Zoe"` sorts before `"adam"`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use contacts::contact::compare;
///
/// assert_eq!(compare("Ana", "Bia"), Ordering::Less);
/// assert_eq!(compare("Zoe", "adam"), Ordering::Less);
/// assert_eq!(compare("Ana", "Ana"), Ordering::Equal);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

/// A single contact: a name used as the search key and a phone number that
/// rides along with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRecord {
    name: String,
    phone: String,
}

impl ContactRecord {
    /// Copies `name` and `phone` into a new record.
    ///
    /// Storage for both fields is reserved up front and a failed reservation is
    /// returned as [`InsertError::Allocation`] instead of aborting the process.
    ///
    /// # Examples
    ///
    /// ```
    /// use contacts::contact::ContactRecord;
    ///
    /// let record = ContactRecord::new("Bob", "555-0101").unwrap();
    /// assert_eq!(record.name(), "Bob");
    /// assert_eq!(record.phone(), "555-0101");
    /// ```
    pub fn new(name: &str, phone: &str) -> Result<Self, InsertError> {
        Ok(Self {
            name: owned(name)?,
            phone: owned(phone)?,
        })
    }

    /// The name this record is keyed by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The phone number stored with the name.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Splits the record into its name and phone.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.phone)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Celular: {}", self.name, self.phone)
    }
}

fn owned(s: &str) -> Result<String, InsertError> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())?;
    out.push_str(s);
    Ok(out)
}

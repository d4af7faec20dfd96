pub(crate) mod details;
pub(crate) mod isbn;
pub(crate) mod suggestions;

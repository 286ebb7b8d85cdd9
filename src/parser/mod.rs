//! Front-ends that turn grammar sources into a [`Grammar`](crate::grammar::Grammar).

pub(crate) mod json;
pub(crate) mod text;

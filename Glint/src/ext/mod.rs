//! Vendor extensions
//!
//! Each extension is an ordinary schema object with an
//! [`Extension`](crate::schema::Extension) impl naming its key; the mapper
//! needs no knowledge of them.

pub mod vrm0;

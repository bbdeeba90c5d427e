//! Value types consumed by the scanner and the reflection walker.
//!
//! This module defines the inert data model that bridges the host
//! application and HTML rendering. Descriptors describe a reflect-able
//! object's shape and are built by an external reflection provider; the
//! renderer itself never inspects live objects.

mod descriptor;
mod document;

pub use descriptor::{DescriptorKind, MemberDescriptor, MemberKind, ObjectDescriptor};
pub use document::{DocumentWrapper, MarkupDocument};

//! Response decoding.
//!
//! Every endpoint expects one of three shapes: a single entity, a page of
//! entities, or a bare acknowledgement. Each shape is a [`ResponseFormat`]
//! that turns raw response text into an [`ApiResult`](crate::ApiResult),
//! reading the `businessCode` status marker shared by all of them.

mod format;

pub use format::{EmptyFormat, EntityFormat, PageFormat, ResponseFormat};
pub(crate) use format::business_error;

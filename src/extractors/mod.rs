//! Request extractors with the rejections the product routes expect.

mod id;
mod payload;
pub use id::IdSegment;
pub use payload::JsonPayload;

mod events;
pub mod formatter;
mod persistence;
mod store;

pub use events::{StoreEvent, SubscriptionId};
pub use formatter::{format_interval, format_until, signed_interval, IntervalParts};
pub use persistence::{decode_countdowns, encode_countdowns, CodecError};
pub use store::{CountdownStore, COUNTDOWNS_KEY, FREE_LIMIT, PREMIUM_KEY, PREMIUM_LIMIT};

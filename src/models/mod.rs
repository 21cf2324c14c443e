pub mod feeds;
pub mod protocol;

pub use feeds::{PeggedValue, PriceResponse, ProtocolData, StablecoinPoint, TokenPrice, TvlPoint};
pub use protocol::ProtocolRecord;

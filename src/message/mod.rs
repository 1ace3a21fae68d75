pub mod badges;
mod decode;
mod envelope;
mod middle;
pub mod tags;
mod types;

pub use self::decode::Decoder;
pub use self::envelope::Envelope;
pub use self::types::{Category, Message};

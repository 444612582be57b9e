//! Wire model types of the Bot API.
//!
//! Field names match the wire names exactly. Optional fields are `Option`s
//! that are left out of the encoded object when `None`, and the `type` field
//! is exposed as `kind`. Fields that hold one of several shapes are
//! `one_of!` unions; see `crate::one_of` for the decode contract.

mod bot;
mod chat;
mod game;
mod inline;
mod markup;
mod media;
mod message;
mod passport;
mod payments;
mod response;
mod sticker;
pub mod tag;
mod update;
mod user;

pub use bot::*;
pub use chat::*;
pub use game::*;
pub use inline::*;
pub use markup::*;
pub use media::*;
pub use message::*;
pub use passport::*;
pub use payments::*;
pub use response::*;
pub use sticker::*;
pub use update::*;
pub use user::*;

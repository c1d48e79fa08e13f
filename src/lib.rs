pub mod token;
pub mod trie;
pub mod lexicon;
pub mod data;
pub mod num;
pub mod error;
pub mod g2p;

pub use g2p::G2P;
pub use token::{Reading, Token, flatten};
pub use lexicon::Lexicon;
pub use error::LexiconError;

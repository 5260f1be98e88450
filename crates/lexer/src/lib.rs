mod classify;
mod index;
mod lexer;

pub use classify::{classify, KeywordClass, TokenContext};
pub use index::{CompletionIndex, PrepareError, PreparedIndex, PREPARE_TIMEOUT};
pub use lexer::{FontHint, KeywordSet, QssLexer};

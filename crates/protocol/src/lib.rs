//! Reversi Protocol Host
//!
//! Hosts one engine behind a line-based text protocol: requests such as
//! INIT, NEWGAME, PLAY and GENMOVE come in, responses such as READY, OK,
//! MOVE, BOARD and RESULT go out. The [`Session`] type does the command
//! handling; the binary wires it to stdin/stdout.

mod session;

pub use session::{Session, SessionConfig};

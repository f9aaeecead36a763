//! wikirace: Wikipedia race route verification
//!
//! A route is a chain of article titles from a start article to a goal
//! article. It is valid when every consecutive pair is joined by an
//! outbound link on the source article's live page.
//!
//! - `LinkChainVerifier`: step-by-step verification against a `LinkSource`
//! - `MediaWikiClient`: `LinkSource` over the MediaWiki Action API
//! - `VerificationSession`: latest-wins cancellation of in-flight checks

pub mod error;
pub mod init;
pub mod links;
pub mod logging;
pub mod mediawiki;
pub mod puzzles;
pub mod route;
pub mod session;
pub mod title;
pub mod verifier;
pub mod verify_route;

#[cfg(test)]
mod testing;

pub use error::{RouteError, TransportError};
pub use links::{LinkQueryPage, LinkSource};
pub use mediawiki::{ClientConfig, MediaWikiClient};
pub use route::{Route, Step};
pub use session::{Superseded, VerificationSession};
pub use verifier::{LinkChainVerifier, LinkExistsResult, VerificationOutcome, VerifierConfig};

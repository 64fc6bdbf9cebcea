//! pinvault: local password manager with a random password generator, a
//! credential store, and PIN-gated reveal of stored passwords.
//!
//! Data is kept in clear text in two key-value slots (`passwords` and
//! `vault_pin`) of a pluggable [`storage::KeyValueStore`]. The PIN guards
//! against casual shoulder-surfing only; it is not encryption.
//!
//! # Quick start
//!
//! ```
//! use pinvault::api::VaultClient;
//! use pinvault::pin::AccessDecision;
//! use pinvault::storage::MemoryStore;
//! use pinvault::vault::record::NewCredential;
//!
//! let mut client = VaultClient::new(MemoryStore::new());
//! let records = client.add(NewCredential::new("github", "s3cret!"))?;
//! let id = records[0].id;
//!
//! client.setup_pin("1234", "1234")?;
//! let now = chrono::Utc::now();
//! assert_eq!(client.request_access(now), AccessDecision::NeedsChallenge);
//! client.verify_pin("1234", now)?;
//! assert_eq!(client.reveal_password(id, now)?, "s3cret!");
//! # Ok::<(), pinvault::error::VaultError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod generator;
pub mod pin;
pub mod storage;
pub mod types;
pub mod vault;

//! Storage layer for the RankScope estimation engine
//!
//! The engine persists its calculation history through a small async
//! key-value interface. This crate provides that interface, two backends,
//! and the codec that maps the stored payload to history entries.
//!
//! # Quick Start
//!
//! ```no_run
//! use rankscope_repository::{HistorySlot, RepositoryConfig, RepositoryLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repository = RepositoryLoader::new(RepositoryConfig::file_system("data"))
//!         .open()
//!         .await?;
//!
//!     let slot = HistorySlot::new(repository, "rankscope.history");
//!     let history = slot.load().await;
//!     println!("{} stored calculations", history.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │        HistoryStore (rankscope-sdk)    │
//! └──────────────┬─────────────────────────┘
//!                │ HistorySlot (JSON codec, fail-open reads)
//!                ↓
//! ┌────────────────────────────────────────┐
//! │        Repository trait                │
//! │  get / set / remove by namespace key   │
//! └──────────────┬─────────────────────────┘
//!       ┌────────┴────────┐
//!       ↓                 ↓
//! ┌──────────────┐  ┌──────────────────┐
//! │ FileSystem   │  │  Memory          │
//! │ <key>.json   │  │  HashMap         │
//! └──────────────┘  └──────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod file_system;
pub mod loader;
pub mod memory;
pub mod slot;
pub mod traits;

// Re-exports - Configuration
pub use config::{ConfigError, RepositoryConfig, RepositorySource};

// Re-exports - Loader
pub use loader::RepositoryLoader;

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Repositories
pub use file_system::FileSystemRepository;
pub use memory::MemoryRepository;
pub use slot::HistorySlot;
pub use traits::Repository;

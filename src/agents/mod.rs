pub mod fetcher;
pub mod notifier;
pub mod registry;

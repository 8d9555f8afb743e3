mod in_memory_store;
mod local_store;
mod store_factory;

pub use in_memory_store::InMemoryContentStore;
pub use local_store::LocalContentStore;
pub use store_factory::ContentStoreFactory;

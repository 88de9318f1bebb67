mod favorites;
mod floods;
mod store;

pub use favorites::FavoritesRegistry;
pub use favorites::RegistryError;
pub use floods::FloodError;
pub use floods::FloodRegistry;
pub use floods::WATER_LEVELS;
pub use store::JsonFileStore;
pub use store::StoreError;

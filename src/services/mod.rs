//! 服务模块

pub mod fetcher;
pub mod organizers;

pub use fetcher::{CacheBackedFetcher, FillStrategy};
pub use organizers::{OrganizersService, OrganizersServiceImpl, create_organizers_service};

pub mod favorite;
pub mod ids;
pub mod listing;

pub use favorite::Favorite;
pub use ids::{AgencyId, ListingId, UserId};
pub use listing::{Listing, ListingStatus, UNTITLED_LISTING};

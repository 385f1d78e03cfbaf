mod filter;
mod load;
mod model;

pub use filter::{ALL_CATEGORIES, category_options, filter_occupations};
pub use load::load_catalog;
pub use model::{CareerPath, Catalog, MarketValue, Occupation, ScoreTier, Skill};

pub mod orders;
pub mod product_colors;
pub mod product_views;
pub mod products;
pub mod ratings;
pub mod size_categories;
pub mod standard_colors;
pub mod standard_sizes;

pub use orders::Entity as Orders;
pub use product_colors::Entity as ProductColors;
pub use product_views::Entity as ProductViews;
pub use products::Entity as Products;
pub use ratings::Entity as Ratings;
pub use size_categories::Entity as SizeCategories;
pub use standard_colors::Entity as StandardColors;
pub use standard_sizes::Entity as StandardSizes;

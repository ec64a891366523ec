//! Growth primitives: compounding, annuity accumulation and inflation transforms
//!
//! All rates are fractional (0.07 = 7%) and compound once per year.

mod compound;
mod inflation;

pub use compound::{
    compound_growth, project_asset_value, project_asset_value_over_time,
    project_value_over_time, AssetValueRow, ContributionTiming, GrowthRow,
};
pub use inflation::{apply_inflation, discount_to_present_value};

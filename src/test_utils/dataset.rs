use std::sync::Arc;

use crate::{config::DashboardConfig, dashboard::DashboardState, dataset::Dataset};

/// Kochi has a mix of every category, Chennai has two high risk restaurants
/// and one medium risk restaurant, and Mysuru only has a lowercase label.
pub(crate) const RISK_CSV: &str = "Restaurant,City,Category,Score\n\
    Green Leaf Cafe,Kochi,Low Risk,0.12\n\
    Spice Route,Kochi,High Risk,0.91\n\
    Marina Dosa,Chennai,High Risk,0.88\n\
    Toddy Shop,Kochi,Unrated,\n\
    Malabar Kitchen,Kochi,Medium Risk,0.55\n\
    Anna Nagar Biryani,Chennai,Medium Risk,0.47\n\
    Harbour Grill,Kochi,High Risk,0.83\n\
    Palace Mess,Mysuru,high risk,0.79\n\
    Besant Tiffin,Chennai,High Risk,0.86\n\
    Backwater Bites,Kochi,Low Risk,0.20\n";

#[track_caller]
pub(crate) fn test_dataset() -> Dataset {
    Dataset::from_reader(RISK_CSV.as_bytes()).expect("Could not parse test CSV")
}

pub(crate) fn test_dashboard_state() -> DashboardState {
    DashboardState {
        dataset: Arc::new(test_dataset()),
        config: DashboardConfig::default(),
    }
}

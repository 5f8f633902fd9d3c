pub mod current_intakes;
pub mod delivery_overview;
pub mod program_overview;
pub mod query_delivery;

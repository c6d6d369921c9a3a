use crate::server::model::query::{AdvancedQuery, PageDefaults};

mod bootcamp;

/// Parses query-string pairs with the default page size of 25.
fn advanced_query(pairs: &[(&str, &str)]) -> AdvancedQuery {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    AdvancedQuery::parse(&pairs, PageDefaults { page: 1, limit: 25 }).unwrap()
}

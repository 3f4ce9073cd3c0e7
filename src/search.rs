use crate::model::HotelRecord;

/// Case-insensitive substring filter over display name and catalog category.
/// An empty query keeps the full collection; input order is preserved.
pub fn filter_hotels<'a>(hotels: &'a [HotelRecord], query: &str) -> Vec<&'a HotelRecord> {
    if query.is_empty() {
        return hotels.iter().collect();
    }

    let needle = query.to_lowercase();
    hotels
        .iter()
        .filter(|hotel| {
            hotel.name.to_lowercase().contains(&needle)
                || hotel.catalog.category.to_lowercase().contains(&needle)
        })
        .collect()
}

use crate::models::{Budget, DateRange, Place, TravelStyle};

/// Price-range tokens allowed for each budget tier
fn allowed_prices(budget: Budget) -> &'static [&'static str] {
    match budget {
        Budget::Low => &["FREE", "$"],
        Budget::Medium => &["FREE", "$", "$$"],
        Budget::High => &["FREE", "$", "$$", "$$$"],
        Budget::Unlimited => &["FREE", "$", "$$", "$$$", "$$$$"],
    }
}

/// Category keywords associated with each travel style
fn style_keywords(style: TravelStyle) -> &'static [&'static str] {
    match style {
        TravelStyle::Relaxation => &["cafe", "park", "spa", "beach", "hot spring", "resort"],
        TravelStyle::Adventure => &["activity", "hiking", "experience", "sport", "outdoor"],
        TravelStyle::Cultural => &[
            "museum", "gallery", "tradition", "history", "heritage", "temple", "palace",
        ],
        TravelStyle::Foodie => &["restaurant", "market", "cafe", "bakery", "local food"],
        TravelStyle::Shopping => &["mall", "market", "outlet", "duty free", "brand"],
        TravelStyle::Nature => &[
            "mountain", "sea", "park", "forest", "valley", "waterfall", "beach",
        ],
    }
}

/// Check whether a place's price token fits the budget tier
///
/// A missing or blank price token passes: most free provider data has no
/// price, and dropping it all would gut the shortlist.
#[inline]
pub fn matches_budget(place: &Place, budget: Budget) -> bool {
    match place.price_range.as_deref() {
        None => true,
        Some(price) if price.trim().is_empty() => true,
        Some(price) => allowed_prices(budget).contains(&price),
    }
}

/// Check whether a place's category fits the travel style
///
/// Passes when the category is missing; otherwise at least one style keyword
/// must appear as a case-insensitive substring of the category.
#[inline]
pub fn matches_style(place: &Place, style: TravelStyle) -> bool {
    let Some(category) = place.category.as_deref() else {
        return true;
    };

    let category = category.to_lowercase();
    style_keywords(style)
        .iter()
        .any(|keyword| category.contains(keyword))
}

/// Check a place against explicit category preferences
///
/// Passes when the caller supplied none, or the place has no category.
#[inline]
pub fn matches_categories(place: &Place, preferred: &[String]) -> bool {
    if preferred.is_empty() {
        return true;
    }
    let Some(category) = place.category.as_deref() else {
        return true;
    };

    let category = category.to_lowercase();
    preferred
        .iter()
        .any(|p| category.contains(&p.to_lowercase()))
}

/// Check whether a place is open at some point during the trip
///
/// Deliberately narrow heuristic, not a calendar parser: the only excluding
/// combination is an operating-hours text signalling a Monday closure while
/// the trip spans a Monday. Everything else passes optimistically.
#[inline]
pub fn is_open_during_trip(place: &Place, dates: Option<&DateRange>) -> bool {
    let (Some(dates), Some(hours)) = (dates, place.operating_hours.as_deref()) else {
        return true;
    };

    let hours = hours.to_lowercase();
    if hours.contains("closed") && hours.contains("monday") {
        return !dates.spans_monday();
    }

    true
}

//! Plain text rendering of the loaded view state.

use pizzamap_core::{
    entities::{Region, Weekday},
    store::ViewStore,
    util::{hours::today_hours, map_url::map_link},
};
use std::fmt::{self, Write};

const ALL: &str = "All";

pub fn render(store: &ViewStore, region: &Region, today: Weekday) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_summary(&mut out, store, region, today)?;
    Ok(out)
}

fn write_summary(
    out: &mut String,
    store: &ViewStore,
    region: &Region,
    today: Weekday,
) -> fmt::Result {
    writeln!(out, "Pizza in {}, {}", region.city, region.state)?;
    writeln!(out)?;
    writeln!(out, "{ALL} ({})", store.total())?;
    for (category, count) in store.category_counts() {
        writeln!(out, "{} ({count})", category.name)?;
    }
    for place in store.filtered_places() {
        writeln!(out)?;
        let style = store
            .style_for(place)
            .map(|c| c.name.as_str())
            .unwrap_or("-");
        writeln!(out, "{} [{style}]", place.name)?;
        writeln!(out, "  {}", place.address)?;
        writeln!(
            out,
            "  {} today: {}",
            today.label(),
            today_hours(place.opening_hours.as_ref(), today)
        )?;
        if let Some(phone) = &place.contact.phone {
            writeln!(out, "  {phone}")?;
        }
        writeln!(
            out,
            "  {}",
            map_link(&place.address, place.map_url.as_deref())
        )?;
    }
    Ok(())
}

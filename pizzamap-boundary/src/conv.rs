use super::*;
use pizzamap_entities as e;

impl From<PizzaStyle> for e::category::Category {
    fn from(from: PizzaStyle) -> Self {
        let PizzaStyle {
            id,
            name,
            slug,
            description,
        } = from;
        Self {
            id: id.into(),
            name,
            slug,
            description,
        }
    }
}

impl From<e::category::Category> for PizzaStyle {
    fn from(from: e::category::Category) -> Self {
        let e::category::Category {
            id,
            name,
            slug,
            description,
        } = from;
        Self {
            id: id.into(),
            name,
            slug,
            description,
        }
    }
}

impl From<PizzeriaStyle> for e::category::CategoryLink {
    fn from(from: PizzeriaStyle) -> Self {
        let PizzeriaStyle {
            id,
            pizzeria_id,
            style_id,
            is_primary,
            pizza_styles,
        } = from;
        Self {
            id: id.into(),
            place_id: pizzeria_id.map(Into::into),
            category_id: style_id.into(),
            is_primary,
            category: pizza_styles.map(Into::into),
        }
    }
}

fn opening_hours(hours: HashMap<String, String>) -> e::hours::OpeningHours {
    hours
        .into_iter()
        .filter_map(|(day, value)| Some((day.parse::<e::hours::Weekday>().ok()?, value)))
        .collect()
}

fn timestamp(s: Option<String>) -> Option<e::time::Timestamp> {
    s.and_then(|s| e::time::Timestamp::parse_rfc3339(&s).ok())
}

impl From<Pizzeria> for e::place::Place {
    fn from(from: Pizzeria) -> Self {
        let Pizzeria {
            id,
            city_id,
            name,
            address,
            lat,
            lng,
            phone,
            website,
            hours,
            description,
            image_url,
            google_maps_url,
            created_at,
            updated_at,
            pizzeria_styles,
        } = from;
        let pos = lat
            .zip(lng)
            .and_then(|(lat, lng)| e::geo::MapPoint::try_from_lat_lng_deg(lat, lng));
        Self {
            id: id.into(),
            region_id: city_id.into(),
            name,
            address,
            pos,
            contact: e::place::Contact { phone, website },
            description,
            image_url,
            map_url: google_maps_url,
            opening_hours: hours.map(opening_hours),
            created_at: timestamp(created_at),
            updated_at: timestamp(updated_at),
            categories: pizzeria_styles
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<e::place::PlaceFields> for NewPizzeria {
    fn from(from: e::place::PlaceFields) -> Self {
        let e::place::PlaceFields {
            region_id,
            name,
            address,
            pos,
            contact: e::place::Contact { phone, website },
            description,
            map_url,
        } = from;
        let (lat, lng) = pos.map(|p| p.to_lat_lng_deg()).unzip();
        Self {
            city_id: region_id.into(),
            name,
            address,
            lat,
            lng,
            phone,
            website,
            description,
            google_maps_url: map_url,
        }
    }
}

impl PizzeriaUpdate {
    pub fn new(fields: e::place::PlaceFields, updated_at: e::time::Timestamp) -> Self {
        let e::place::PlaceFields {
            region_id: _,
            name,
            address,
            pos,
            contact: e::place::Contact { phone, website },
            description,
            map_url,
        } = fields;
        let (lat, lng) = pos.map(|p| p.to_lat_lng_deg()).unzip();
        Self {
            name,
            address,
            lat,
            lng,
            phone,
            website,
            description,
            google_maps_url: map_url,
            updated_at: updated_at.format_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIZZERIAS: &str = r#"[{
        "id": "kens",
        "city_id": "5f835ff7-1600-4979-9688-1935bfb98c2c",
        "name": "Ken's Artisan Pizza",
        "address": "304 SE 28th Ave",
        "lat": 45.5215,
        "lng": -122.6372,
        "phone": null,
        "website": "https://kensartisan.com",
        "hours": {"mon": "5pm-9pm", "sat": "5pm-10pm", "holiday": "closed"},
        "description": null,
        "image_url": null,
        "google_maps_url": null,
        "created_at": "2024-03-01T12:30:00+00:00",
        "updated_at": null,
        "pizzeria_styles": [{
            "id": "link-1",
            "style_id": "neapolitan-id",
            "is_primary": true,
            "pizza_styles": {
                "id": "neapolitan-id",
                "name": "Neapolitan",
                "slug": "neapolitan",
                "description": "Wood fired"
            }
        }]
    }]"#;

    #[test]
    fn convert_joined_pizzeria() {
        let rows: Vec<Pizzeria> = serde_json::from_str(PIZZERIAS).unwrap();
        let place = e::place::Place::from(rows.into_iter().next().unwrap());
        assert_eq!("kens", place.id.as_str());
        assert_eq!(Some((45.5215, -122.6372)), place.pos.map(|p| p.to_lat_lng_deg()));
        assert_eq!(Some("https://kensartisan.com"), place.contact.website.as_deref());
        assert_eq!(Some(1_709_296_200), place.created_at.map(|t| t.as_secs()));
        assert!(place.updated_at.is_none());

        let hours = place.opening_hours.as_ref().unwrap();
        assert_eq!(Some("5pm-9pm"), hours.get(e::hours::Weekday::Monday));
        assert_eq!(2, hours.iter().count());

        let category = place.primary_category().unwrap();
        assert_eq!("neapolitan", category.slug);
        assert_eq!(Some("Wood fired"), category.description.as_deref());
        assert_eq!("neapolitan-id", place.primary_category_id().unwrap().as_str());
    }

    #[test]
    fn pizzeria_without_coordinates_or_styles() {
        let row: Pizzeria = serde_json::from_str(
            r#"{"id":"x","city_id":"c","name":"n","address":"a","lat":null,"lng":null,
                "phone":null,"website":null,"hours":null,"description":null,
                "image_url":null,"google_maps_url":null,"created_at":null,"updated_at":null}"#,
        )
        .unwrap();
        let place = e::place::Place::from(row);
        assert!(place.pos.is_none());
        assert!(place.categories.is_empty());
        assert!(place.opening_hours.is_none());
    }

    fn fields(pos: Option<e::geo::MapPoint>) -> e::place::PlaceFields {
        e::place::PlaceFields {
            region_id: "portland".into(),
            name: "Ken's Artisan Pizza".into(),
            address: "304 SE 28th Ave".into(),
            pos,
            contact: e::place::Contact::default(),
            description: None,
            map_url: None,
        }
    }

    #[test]
    fn insert_writes_missing_coordinates_as_null() {
        let json = serde_json::to_value(NewPizzeria::from(fields(None))).unwrap();
        assert_eq!("portland", json["city_id"]);
        assert!(json["lat"].is_null());
        assert!(json.as_object().unwrap().contains_key("lng"));
    }

    #[test]
    fn update_omits_missing_coordinates() {
        let updated_at = e::time::Timestamp::from_secs(1_709_296_200).unwrap();
        let json = serde_json::to_value(PizzeriaUpdate::new(fields(None), updated_at)).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("lat"));
        assert!(!obj.contains_key("lng"));
        assert!(!obj.contains_key("city_id"));
        assert_eq!("2024-03-01T12:30:00Z", json["updated_at"]);

        let pos = e::geo::MapPoint::from_lat_lng_deg(45.5, -122.6);
        let json = serde_json::to_value(PizzeriaUpdate::new(fields(Some(pos)), updated_at)).unwrap();
        assert_eq!(45.5, json["lat"]);
        assert_eq!(-122.6, json["lng"]);
    }
}

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::place_builder::*;

pub mod place_builder {

    use super::*;
    use crate::{
        category::*, geo::*, hours::*, id::*, place::*, region::Region,
    };

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.place.address = address.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = Some(pos);
            self
        }
        pub fn no_pos(mut self) -> Self {
            self.place.pos = None;
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.place.contact.phone = Some(phone.into());
            self
        }
        pub fn map_url(mut self, url: &str) -> Self {
            self.place.map_url = Some(url.into());
            self
        }
        pub fn hours(mut self, day: Weekday, hours: &str) -> Self {
            self.place
                .opening_hours
                .get_or_insert_with(OpeningHours::new)
                .set(day, hours);
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            let link = CategoryLink {
                id: Id::new(),
                place_id: Some(self.place.id.clone()),
                category_id: category.id.clone(),
                is_primary: true,
                category: Some(category),
            };
            self.place.categories.push(link);
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    region_id: Region::PORTLAND.id(),
                    name: "".into(),
                    address: "".into(),
                    pos: Some(Region::PORTLAND.center()),
                    contact: Contact::default(),
                    description: None,
                    image_url: None,
                    map_url: None,
                    opening_hours: None,
                    created_at: None,
                    updated_at: None,
                    categories: vec![],
                },
            }
        }
    }
}

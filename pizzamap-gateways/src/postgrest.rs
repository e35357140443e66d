use crate::{encode, Error};
use pizzamap_boundary as json;
use pizzamap_core::{entities::*, repositories};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;

type Result<T> = std::result::Result<T, Error>;

const PLACES_SELECTION: &str = "*,pizzeria_styles(id,style_id,is_primary,pizza_styles(*))";

/// Client of the hosted REST backend.
#[derive(Debug, Clone)]
pub struct Postgrest {
    client: Client,
    url: String,
}

impl Postgrest {
    /// `project_url` is the root of the hosted project,
    /// the REST endpoint lives below `/rest/v1`.
    pub fn new(project_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value(api_key)?);
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {api_key}"))?);
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            url: rest_url(project_url),
        })
    }

    fn table(&self, name: &str) -> String {
        format!("{}/{name}", self.url)
    }

    fn places_url(&self) -> String {
        format!("{}?select={}", self.table("pizzerias"), encode(PLACES_SELECTION))
    }

    fn categories_url(&self) -> String {
        format!("{}?select=*&order=name", self.table("pizza_styles"))
    }

    fn place_url(&self, id: &Id) -> String {
        format!("{}?id=eq.{}", self.table("pizzerias"), encode(id.as_str()))
    }

    fn category_links_url(&self, place_id: &Id) -> String {
        format!(
            "{}?pizzeria_id=eq.{}",
            self.table("pizzeria_styles"),
            encode(place_id.as_str())
        )
    }

    async fn send_json<T>(&self, request: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        into_json(request.send().await?).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<()> {
        into_empty(request.send().await?).await
    }
}

fn rest_url(project_url: &str) -> String {
    format!("{}/rest/v1", project_url.trim().trim_end_matches('/'))
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|err| Error::Config(err.to_string()))
}

async fn api_error(response: Response) -> Error {
    let status = response.status();
    match response.json::<json::Error>().await {
        Ok(err) => Error::Api(err),
        Err(err) => {
            log::debug!("Unable to read the error body: {err}");
            Error::Fetch(format!("Unexpected response status: {status}"))
        }
    }
}

async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(api_error(response).await)
    }
}

async fn into_empty(response: Response) -> Result<()> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(api_error(response).await)
    }
}

impl repositories::PlaceRepo for Postgrest {
    async fn all_places(&self) -> repositories::Result<Vec<Place>> {
        let rows: Vec<json::Pizzeria> = self.send_json(self.client.get(self.places_url())).await?;
        log::debug!("Fetched {} places", rows.len());
        Ok(rows.into_iter().map(Place::from).collect())
    }

    async fn create_place(&self, place: &PlaceFields) -> repositories::Result<Id> {
        let body = json::NewPizzeria::from(place.clone());
        let request = self
            .client
            .post(format!("{}?select=id", self.table("pizzerias")))
            .header("Prefer", "return=representation")
            .json(&body);
        let inserted: Vec<json::InsertedId> = self.send_json(request).await?;
        let id = inserted
            .into_iter()
            .next()
            .map(|row| Id::from(row.id))
            .ok_or(Error::MissingId)?;
        Ok(id)
    }

    async fn update_place(
        &self,
        id: &Id,
        place: &PlaceFields,
        updated_at: Timestamp,
    ) -> repositories::Result<()> {
        let body = json::PizzeriaUpdate::new(place.clone(), updated_at);
        self.send(self.client.patch(self.place_url(id)).json(&body))
            .await?;
        Ok(())
    }
}

impl repositories::CategoryRepo for Postgrest {
    async fn all_categories(&self) -> repositories::Result<Vec<Category>> {
        let rows: Vec<json::PizzaStyle> =
            self.send_json(self.client.get(self.categories_url())).await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}

impl repositories::CategoryLinkRepo for Postgrest {
    async fn create_category_link(
        &self,
        place_id: &Id,
        category_id: &Id,
    ) -> repositories::Result<()> {
        let body = json::NewPizzeriaStyle {
            pizzeria_id: place_id.to_string(),
            style_id: category_id.to_string(),
            is_primary: true,
        };
        self.send(self.client.post(self.table("pizzeria_styles")).json(&body))
            .await?;
        Ok(())
    }

    async fn delete_category_links(&self, place_id: &Id) -> repositories::Result<()> {
        self.send(self.client.delete(self.category_links_url(place_id)))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> Postgrest {
        Postgrest::new("https://abc.supabase.co/", "anon-key").unwrap()
    }

    #[test]
    fn build_rest_urls() {
        let db = backend();
        assert_eq!("https://abc.supabase.co/rest/v1/pizzerias", db.table("pizzerias"));
        assert_eq!(
            "https://abc.supabase.co/rest/v1/pizza_styles?select=*&order=name",
            db.categories_url()
        );
        assert_eq!(
            "https://abc.supabase.co/rest/v1/pizzerias?id=eq.1f2e-3d",
            db.place_url(&"1f2e-3d".into())
        );
        assert_eq!(
            "https://abc.supabase.co/rest/v1/pizzeria_styles?pizzeria_id=eq.a%20b",
            db.category_links_url(&"a b".into())
        );
        assert!(db
            .places_url()
            .starts_with("https://abc.supabase.co/rest/v1/pizzerias?select=%2A%2Cpizzeria_styles%28"));
    }

    #[test]
    fn reject_invalid_api_key() {
        assert!(matches!(
            Postgrest::new("https://abc.supabase.co", "line\nbreak"),
            Err(Error::Config(_))
        ));
    }
}
